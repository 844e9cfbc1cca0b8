//! Welcome demo firmware for the Spiking Neural Processor T1.
//!
//! Types the welcome script to the board console and parks. This is the
//! build-and-boot-flow demo: if the banner shows up on the serial port, the
//! toolchain, the linker script, and the console path all work.

#![no_std]
#![no_main]

use panic_halt as _;
use riscv_rt::entry;

use welcome_core::script;
use welcome_core::typewriter::Timing;
use welcome_core::{Clock, Console};

// Console UART block on the T1 control core's peripheral bus.
const UART_TX_DATA: *mut u8 = 0x4000_C000 as *mut u8;
const UART_TX_STATUS: *const u8 = 0x4000_C004 as *const u8;
// TX ready (bit 0)
const UART_TX_READY: u8 = 0x01;

const CPU_FREQ: u32 = 24_000_000;
// Experimentally found adjustment for the nop loop overhead.
const NOPS_PER_MS: u32 = CPU_FREQ / 1_000 / 4;

fn write_byte(byte: u8) {
    unsafe {
        while core::ptr::read_volatile(UART_TX_STATUS) & UART_TX_READY == 0 {}
        core::ptr::write_volatile(UART_TX_DATA, byte);
    }
}

/// Console over the T1 UART. The script is plain ASCII, but anything wider
/// goes out as UTF-8 bytes rather than getting dropped.
struct UartConsole {}

impl Console for UartConsole {
    fn emit_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        for byte in c.encode_utf8(&mut buf).bytes() {
            write_byte(byte);
        }
    }

    fn emit_str(&mut self, s: &str) {
        for byte in s.bytes() {
            write_byte(byte);
        }
    }
}

/// Clock over a calibrated nop loop. No timer peripheral needed for a demo
/// that only paces console output.
struct BusyClock {}

impl Clock for BusyClock {
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms.saturating_mul(NOPS_PER_MS) {
            unsafe { core::arch::asm!("nop") }
        }
    }
}

#[entry]
fn main() -> ! {
    let mut console = UartConsole {};
    let mut clock = BusyClock {};

    script::run(&mut console, &mut clock, Timing::default());

    loop {
        unsafe { riscv::asm::wfi() }
    }
}
