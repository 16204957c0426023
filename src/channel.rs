//! Configuration update channel for `no_std` environments.
//!
//! The configuration store (web handlers, storage loader) pushes
//! [`ConfigChange`]s from any context; the render loop drains them between
//! ticks so every frame sees one consistent snapshot. Built on
//! `critical-section` and `heapless::Deque`.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::{ConfigChange, DisplayConfig};

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Bounded queue of pending configuration changes
pub struct ConfigChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<ConfigChange, SIZE>>>,
}

impl<const SIZE: usize> ConfigChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for the configuration store side
    pub const fn sender(&self) -> ConfigSender<'_, SIZE> {
        ConfigSender { channel: self }
    }

    /// Handle for the render loop side
    pub const fn receiver(&self) -> ConfigReceiver<'_, SIZE> {
        ConfigReceiver { channel: self }
    }

    fn try_send(&self, change: ConfigChange) -> Result<(), TrySendError<ConfigChange>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(change).map_err(TrySendError)
        })
    }

    fn try_receive(&self) -> Result<ConfigChange, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }
}

impl<const SIZE: usize> Default for ConfigChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct ConfigSender<'a, const SIZE: usize> {
    channel: &'a ConfigChannel<SIZE>,
}

impl<const SIZE: usize> ConfigSender<'_, SIZE> {
    /// Queue a change.
    ///
    /// Returns `Err(TrySendError(change))` if the channel is full.
    pub fn try_send(&self, change: ConfigChange) -> Result<(), TrySendError<ConfigChange>> {
        let result = self.channel.try_send(change);
        #[cfg(feature = "esp32-log")]
        if result.is_err() {
            println!("[ConfigSender.try_send] channel full, dropping {:?}", change);
        }
        result
    }
}

#[derive(Clone, Copy)]
pub struct ConfigReceiver<'a, const SIZE: usize> {
    channel: &'a ConfigChannel<SIZE>,
}

impl<const SIZE: usize> ConfigReceiver<'_, SIZE> {
    /// Take the oldest pending change.
    ///
    /// Returns `Err(TryReceiveError)` if nothing is pending.
    pub fn try_receive(&self) -> Result<ConfigChange, TryReceiveError> {
        self.channel.try_receive()
    }

    /// Apply every pending change to `config` in order.
    ///
    /// Returns the number of changes applied.
    pub fn drain_into(&self, config: &mut DisplayConfig) -> usize {
        let mut applied = 0;
        while let Ok(change) = self.try_receive() {
            config.apply(change);
            applied += 1;
        }
        #[cfg(feature = "esp32-log")]
        if applied > 0 {
            println!("[ConfigReceiver.drain_into] applied {} changes", applied);
        }
        applied
    }
}
