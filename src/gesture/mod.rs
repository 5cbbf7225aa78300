//! The gesture disambiguation engine.
//!
//! Consumes raw per-device pointer events (mouse, pen, any number of touch
//! contacts) and emits unambiguous semantic painting events: stroke
//! lifecycle, dots, multi-finger taps, single-finger holds and two-finger
//! manipulations. Exactly one semantic interpretation is emitted per
//! physical gesture; an interpretation invalidated mid-flight (a stroke
//! preempted by a manipulation, a drag that turns out to be a dot) is
//! cleanly canceled.
//!
//! All raw events must be fed in serially from one logical input thread.
//! The only concurrency boundary is the tap-debounce window, which is
//! internally synchronized (see [`tap`]).

pub mod device;
pub mod events;
pub mod processor;
pub mod raw;
pub mod receiver;
pub mod stroke;
pub mod tap;

// Re-export commonly used types at module level
pub use device::{DeviceInfo, DeviceKind, MOUSE_DEVICE};
pub use events::{GestureSink, PaintEvent};
pub use processor::{GestureError, GestureMode, PaintProcessor};
pub use raw::{ManipulationDelta, MouseButton, RawEvent, SystemGesture};
pub use stroke::Stroke;

use crate::config::GestureConfig;
use log::warn;
use receiver::{MouseReceiver, PenReceiver, TouchReceiver};
use std::time::{Duration, Instant};

/// The assembled input pipeline: one processor, three receivers.
///
/// Receivers are independent instances composed over the same processor;
/// [`PaintInput::handle`] routes each raw event to exactly one of them by
/// channel and device kind.
pub struct PaintInput<S> {
    processor: PaintProcessor<S>,
    mouse: MouseReceiver,
    pen: PenReceiver,
    touch: TouchReceiver,
}

impl<S: GestureSink> PaintInput<S> {
    pub fn new(config: &GestureConfig, sink: S) -> Self {
        Self {
            processor: PaintProcessor::new(sink),
            mouse: MouseReceiver::new(config.dot_threshold_px),
            pen: PenReceiver,
            touch: TouchReceiver::new(
                Duration::from_millis(config.tap_window_ms),
                config.finger_painting,
            ),
        }
    }

    /// Feeds one raw event through the pipeline, stamped with the time it
    /// was delivered (the tap window is measured from it).
    pub fn handle(&mut self, event: &RawEvent, now: Instant) -> Result<(), GestureError> {
        match *event {
            RawEvent::MouseDown {
                button,
                position,
                from_stylus,
            } => self
                .mouse
                .on_press(button, position, from_stylus, &mut self.processor),
            RawEvent::MouseMove {
                position,
                left_held,
                from_stylus,
            } => self
                .mouse
                .on_motion(position, left_held, from_stylus, &mut self.processor),
            RawEvent::MouseUp {
                button,
                position,
                from_stylus,
            } => self
                .mouse
                .on_release(button, position, from_stylus, &mut self.processor),
            RawEvent::ContactDown { device, position } => match device.kind {
                DeviceKind::Pen => self.pen.on_contact_down(device, position, &mut self.processor),
                DeviceKind::Touch => {
                    self.touch
                        .on_contact_down(device, position, &mut self.processor)
                }
                DeviceKind::Mouse => Ok(self.ignore_mouse_contact(device)),
            },
            RawEvent::ContactMove { device, position } => match device.kind {
                DeviceKind::Pen => self.pen.on_contact_move(device, position, &mut self.processor),
                DeviceKind::Touch => {
                    self.touch
                        .on_contact_move(device, position, &mut self.processor)
                }
                DeviceKind::Mouse => Ok(self.ignore_mouse_contact(device)),
            },
            RawEvent::ContactUp { device, position } => match device.kind {
                DeviceKind::Pen => self.pen.on_contact_up(device, position, &mut self.processor),
                DeviceKind::Touch => self.touch.on_contact_up(device, position, &mut self.processor),
                DeviceKind::Mouse => Ok(self.ignore_mouse_contact(device)),
            },
            RawEvent::Gesture {
                device,
                position,
                gesture,
            } => match device.kind {
                DeviceKind::Pen => self
                    .pen
                    .on_gesture(device, position, gesture, &mut self.processor),
                DeviceKind::Touch => {
                    self.touch
                        .on_gesture(device, position, gesture, now, &mut self.processor)
                }
                DeviceKind::Mouse => Ok(self.ignore_mouse_contact(device)),
            },
            RawEvent::ManipulationDelta { delta } => {
                self.touch.on_manipulation_delta(&delta, &mut self.processor);
                Ok(())
            }
            RawEvent::ManipulationCompleted => {
                self.touch.on_manipulation_completed(&mut self.processor);
                Ok(())
            }
        }
    }

    fn ignore_mouse_contact(&self, device: DeviceInfo) {
        // Mouse input travels on the mouse channel only.
        warn!("ignoring contact event with mouse device kind ({device})");
    }

    /// Resolves an expired tap window, if any. Call this at (or after) the
    /// instant reported by [`PaintInput::next_tap_deadline`]; it is safe to
    /// call at any time from the input thread.
    pub fn pump_taps(&mut self, now: Instant) {
        self.touch.pump_taps(now, &mut self.processor);
    }

    /// When the currently open tap window closes, if one is open.
    pub fn next_tap_deadline(&self) -> Option<Instant> {
        self.touch.next_tap_deadline()
    }

    /// Whether fingers may paint. When disabled, touch contacts never
    /// produce stroke or dot events and single-finger dragging escalates to
    /// manipulation instead.
    pub fn finger_painting(&self) -> bool {
        self.touch.finger_painting()
    }

    pub fn set_finger_painting(&mut self, enabled: bool) {
        self.touch.set_finger_painting(enabled);
    }

    pub fn processor(&self) -> &PaintProcessor<S> {
        &self.processor
    }

    pub fn sink(&self) -> &S {
        self.processor.sink()
    }

    pub fn sink_mut(&mut self) -> &mut S {
        self.processor.sink_mut()
    }

    pub fn into_sink(self) -> S {
        self.processor.into_sink()
    }
}

#[cfg(test)]
mod tests;
