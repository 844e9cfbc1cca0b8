//! The scripted welcome narrative.
//!
//! Pure sequencing, no logic: the same fixed text in the same fixed order on
//! every run, ending in the banner.

use crate::typewriter::{Timing, Typewriter};
use crate::{Clock, Console};

/// The closing banner, one `emit_str` call per line.
pub const BANNER: [&str; 5] = [
    " _|_|_|  _|      _|  _|      _|    _|_|    _|_|_|_|_|  _|_|_|_|  _|_|_|      _|_|   \n",
    "   _|    _|_|    _|  _|_|    _|  _|    _|      _|      _|        _|    _|  _|    _| \n",
    "   _|    _|  _|  _|  _|  _|  _|  _|_|_|_|      _|      _|_|_|    _|_|_|    _|_|_|_| \n",
    "   _|    _|    _|_|  _|    _|_|  _|    _|      _|      _|        _|    _|  _|    _| \n",
    " _|_|_|  _|      _|  _|      _|  _|    _|      _|      _|_|_|_|  _|    _|  _|    _| \n",
];

/// Play the whole welcome script against the given capabilities.
pub fn run<C: Console, K: Clock>(console: &mut C, clock: &mut K, timing: Timing) {
    let mut tw = Typewriter::new(console, clock, timing);

    tw.type_text("___\n");
    tw.type_text("\nWelcome Innaterian!");
    tw.blink_cursor(1);
    tw.type_text("\n");
    tw.blink_cursor(3);
    tw.type_text("\nThis is a demonstration of the build and boot flow for the");
    tw.type_text("\nInnatera's Spiking Neural Processor T1, the ultra-low power");
    tw.type_text("\nneuromorphic microcontroller for always-on sensing applications.");
    tw.blink_cursor(2);
    tw.type_text("\n");
    tw.type_text("\nThe processor uses an ultra-low-power spiking neural network");
    tw.type_text("\nengine and a nimble RISC-V processor core to form a single-chip");
    tw.type_text("\nsolution for processing sensor data quickly and efficiently.");
    tw.blink_cursor(2);
    tw.type_text("\n");
    tw.type_text("\nThe development kit contains more applications that demonstrate");
    tw.type_text("\nthe capabilities of the Neural Network accelerators available in T1.");
    tw.blink_cursor(1);
    tw.type_text("\n");
    tw.type_text("\nHave fun spiking!");
    tw.blink_cursor(2);
    tw.type_text("\n\n");

    for line in BANNER {
        console.emit_str(line);
    }
}
