//! Network link status

/// Reports whether the device has a usable network connection.
///
/// For Ethernet/WiFi stacks with DHCP this should only return `true` once an
/// address has been configured, since NTP servers are reached by hostname.
pub trait NetworkStatus {
    fn is_connected(&self) -> bool;
}

impl<T: NetworkStatus + ?Sized> NetworkStatus for &T {
    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }
}

impl NetworkStatus for bool {
    fn is_connected(&self) -> bool {
        *self
    }
}
