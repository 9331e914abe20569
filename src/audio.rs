//! Shot sound.  The terminal bell is the only sound source available;
//! when muted every call is a no-op.

use std::io::Write;

use crossterm::{style::Print, QueueableCommand};

pub struct Beeper {
    enabled: bool,
}

impl Beeper {
    pub fn new(enabled: bool) -> Self {
        Beeper { enabled }
    }

    /// Queue a bell; it is emitted with the next frame flush.
    pub fn shot<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if self.enabled {
            out.queue(Print('\x07'))?;
        }
        Ok(())
    }
}
