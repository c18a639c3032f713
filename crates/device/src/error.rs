//! Device error types

use thiserror::Error;

/// Errors raised while talking to the launcher.
///
/// There is no retry policy anywhere: transport failures propagate to the
/// caller as-is, and a mid-session failure ends the interactive UIs.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// No attached USB device matched the launcher's vendor/product pair.
    #[error("no launcher found (vendor {vendor:#06x}, product {product:#06x})")]
    NotFound { vendor: u16, product: u16 },

    /// Any underlying USB failure (open, claim, control transfer, reset).
    #[error("USB error: {0}")]
    Usb(#[from] rusb::Error),
}

pub type Result<T> = std::result::Result<T, DeviceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_names_identity() {
        let err = DeviceError::NotFound {
            vendor: 0x1130,
            product: 0x0202,
        };
        let msg = format!("{err}");
        assert!(msg.contains("0x1130"));
        assert!(msg.contains("0x0202"));
    }

    #[test]
    fn test_usb_error_wraps_rusb() {
        let err = DeviceError::from(rusb::Error::NoDevice);
        assert!(matches!(err, DeviceError::Usb(rusb::Error::NoDevice)));
    }
}
