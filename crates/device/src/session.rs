//! USB session lifecycle
//!
//! A [`Session`] binds the process to the one physical launcher for its
//! whole lifetime: find the device by vendor/product, open it, detach any
//! kernel driver from its interfaces, select the first configuration and
//! claim the first interface. Teardown releases the interface and resets
//! the handle; skipping the reset leaves the device dead until it is
//! physically replugged.

use protocol::{PRODUCT_ID, VENDOR_ID};
use rusb::{Context, Device, DeviceHandle, UsbContext};
use tracing::{debug, warn};

use crate::error::{DeviceError, Result};

/// Interfaces the stock kernel HID driver tends to bind to.
const KERNEL_INTERFACES: [u8; 2] = [0, 1];

/// An open, claimed handle to the launcher.
///
/// Exactly one session may exist per physical device at a time; the OS
/// driver claim enforces that, not this code. Dropping the session tears
/// it down the same way [`Session::close`] does, so every exit path
/// releases the device.
pub struct Session {
    handle: Option<DeviceHandle<Context>>,
    interface: u8,
}

impl Session {
    /// Find and open the launcher.
    ///
    /// Scans attached devices for the first vendor/product match and
    /// fails with [`DeviceError::NotFound`] when there is none. On a
    /// match: detach kernel drivers from interfaces 0 and 1 (failures are
    /// logged, the claim below surfaces real problems), select the first
    /// configuration, claim the first interface, select its first
    /// alternate setting.
    pub fn open(context: &Context) -> Result<Self> {
        let device = find_launcher(context)?.ok_or(DeviceError::NotFound {
            vendor: VENDOR_ID,
            product: PRODUCT_ID,
        })?;

        debug!(
            "found launcher on bus {:03} address {:03}",
            device.bus_number(),
            device.address()
        );

        let handle = device.open()?;

        for iface in KERNEL_INTERFACES {
            match handle.kernel_driver_active(iface) {
                Ok(true) => {
                    debug!("detaching kernel driver from interface {iface}");
                    if let Err(e) = handle.detach_kernel_driver(iface) {
                        warn!("failed to detach kernel driver from interface {iface}: {e}");
                    }
                }
                Ok(false) => {}
                Err(e) => {
                    debug!("could not check kernel driver on interface {iface}: {e}");
                }
            }
        }

        let config = device.config_descriptor(0)?;
        handle.set_active_configuration(config.number())?;

        let interface = config
            .interfaces()
            .next()
            .ok_or(rusb::Error::NotFound)?
            .number();
        handle.claim_interface(interface)?;

        let setting = config
            .interfaces()
            .next()
            .and_then(|i| i.descriptors().next())
            .map(|d| d.setting_number())
            .unwrap_or(0);
        handle.set_alternate_setting(interface, setting)?;

        debug!("claimed interface {interface}, alternate setting {setting}");

        Ok(Self {
            handle: Some(handle),
            interface,
        })
    }

    /// Borrow the open handle.
    pub(crate) fn handle(&self) -> Result<&DeviceHandle<Context>> {
        self.handle
            .as_ref()
            .ok_or(DeviceError::Usb(rusb::Error::NoDevice))
    }

    /// Release the interface and reset the handle.
    pub fn close(mut self) -> Result<()> {
        self.teardown().map_err(DeviceError::from)
    }

    fn teardown(&mut self) -> std::result::Result<(), rusb::Error> {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };

        if let Err(e) = handle.release_interface(self.interface) {
            warn!("failed to release interface {}: {}", self.interface, e);
        }

        // The device refuses further commands until a physical replug
        // unless the handle is reset on the way out.
        handle.reset()?;
        debug!("session closed");
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Err(e) = self.teardown() {
            warn!("session teardown failed: {e}");
        }
    }
}

/// Scan attached devices for the launcher's vendor/product pair.
///
/// Devices whose descriptor cannot be read are skipped, not fatal.
fn find_launcher(context: &Context) -> std::result::Result<Option<Device<Context>>, rusb::Error> {
    for device in context.devices()?.iter() {
        let Ok(descriptor) = device.device_descriptor() else {
            continue;
        };
        if descriptor.vendor_id() == VENDOR_ID && descriptor.product_id() == PRODUCT_ID {
            return Ok(Some(device));
        }
    }
    Ok(None)
}
