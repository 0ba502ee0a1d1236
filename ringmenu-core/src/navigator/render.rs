//! Payload rendering
//!
//! Drawing is supplied by the caller, either as a [`Render`] implementation
//! or as three plain function pointers collected in [`Callbacks`].

use crate::error::MenuError;
use crate::node::{Payload, PayloadKind};

/// Sink for rendered payloads, one method per payload type
pub trait Render {
    /// Draw a label
    fn text(&mut self, text: &str);

    /// Draw a whole number
    fn integer(&mut self, value: i64);

    /// Draw a fractional number
    fn real(&mut self, value: f64);
}

impl<R: Render + ?Sized> Render for &mut R {
    fn text(&mut self, text: &str) {
        (**self).text(text)
    }

    fn integer(&mut self, value: i64) {
        (**self).integer(value)
    }

    fn real(&mut self, value: f64) {
        (**self).real(value)
    }
}

/// Hand `payload` to the matching renderer method
///
/// An absent payload is drawn as `placeholder` through [`Render::text`].
pub fn dispatch<R: Render + ?Sized>(payload: &Payload, placeholder: &str, renderer: &mut R) {
    match payload {
        Payload::Text(label) => renderer.text(label.as_str()),
        Payload::Integer(value) => renderer.integer(*value),
        Payload::Real(value) => renderer.real(*value),
        Payload::Absent => renderer.text(placeholder),
    }
}

/// Function-pointer renderer slots
///
/// Each slot starts unset. Dispatching a payload whose slot is unset draws
/// nothing and reports [`MenuError::MissingRenderer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Callbacks {
    text: Option<fn(&str)>,
    integer: Option<fn(i64)>,
    real: Option<fn(f64)>,
}

impl Callbacks {
    pub const fn new() -> Self {
        Self {
            text: None,
            integer: None,
            real: None,
        }
    }

    pub fn set_text(&mut self, render: fn(&str)) {
        self.text = Some(render);
    }

    pub fn set_integer(&mut self, render: fn(i64)) {
        self.integer = Some(render);
    }

    pub fn set_real(&mut self, render: fn(f64)) {
        self.real = Some(render);
    }

    /// Returns true if a renderer is registered for `kind`
    ///
    /// Absent payloads go through the text slot.
    pub fn has(&self, kind: PayloadKind) -> bool {
        match kind {
            PayloadKind::Text | PayloadKind::Absent => self.text.is_some(),
            PayloadKind::Integer => self.integer.is_some(),
            PayloadKind::Real => self.real.is_some(),
        }
    }

    /// Render `payload` through the registered slot
    pub fn dispatch(&self, payload: &Payload, placeholder: &str) -> Result<(), MenuError> {
        let kind = payload.kind();
        if !self.has(kind) {
            #[cfg(feature = "defmt")]
            defmt::warn!("no renderer registered for {} payload", kind);
            return Err(MenuError::MissingRenderer(kind));
        }

        let mut slots = *self;
        dispatch(payload, placeholder, &mut slots);
        Ok(())
    }
}

impl Render for Callbacks {
    fn text(&mut self, text: &str) {
        if let Some(render) = self.text {
            render(text);
        }
    }

    fn integer(&mut self, value: i64) {
        if let Some(render) = self.integer {
            render(value);
        }
    }

    fn real(&mut self, value: f64) {
        if let Some(render) = self.real {
            render(value);
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Callbacks {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Callbacks(text={}, integer={}, real={})",
            self.text.is_some(),
            self.integer.is_some(),
            self.real.is_some()
        );
    }
}
