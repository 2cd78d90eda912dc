//! WASM API for the clock-level 6502.
//!
//! Provides JavaScript-callable interfaces for clocking, register and bus
//! inspection, and program loading.

use crate::{BusCycle, FlatMemory, MemoryBus, ReadWrite, Registers, System};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// One bus transaction, as handed to JavaScript
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct BusTransaction {
    address: u16,
    data: u8,
    write: bool,
}

#[wasm_bindgen]
impl BusTransaction {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn data(&self) -> u8 {
        self.data
    }

    #[wasm_bindgen(getter)]
    pub fn write(&self) -> bool {
        self.write
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    system: System<FlatMemory>,
    on_write: Option<js_sys::Function>,
    program_start: u16,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an emulator with 64KB of zeroed memory, PC at 0x0000
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let mut system = System::new(FlatMemory::new());
        system.mpu_mut().load_registers(&Registers::default());
        Emulator6502 {
            system,
            on_write: None,
            program_start: 0x0000,
        }
    }

    /// Register a callback `(address, value)` invoked on every write clock
    pub fn set_write_listener(&mut self, listener: js_sys::Function) {
        self.on_write = Some(listener);
    }

    /// Run one clock
    pub fn clock(&mut self) -> BusTransaction {
        let cycle = self.system.clock();
        self.notify(&cycle);
        BusTransaction::from(cycle)
    }

    /// Run one instruction and return its clock count
    pub fn step(&mut self) -> u32 {
        let listener = self.on_write.clone();
        self.system.step_with(|cycle| notify_write(listener.as_ref(), cycle))
    }

    /// Run `cycles` clocks and return the total clock count
    pub fn run_for_cycles(&mut self, cycles: u32) -> f64 {
        for _ in 0..cycles {
            self.clock();
        }
        self.system.cycles() as f64
    }

    /// Reload the power-on registers at the program start, keeping memory
    pub fn reset(&mut self) {
        let memory = self.system.memory().clone();
        self.system = System::new(memory);
        self.system.mpu_mut().load_registers(&Registers {
            pc: self.program_start,
            ..Registers::default()
        });
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.system.mpu().datapath().a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.system.mpu().datapath().x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.system.mpu().datapath().y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.system.mpu().datapath().pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.system.mpu().datapath().s()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.system.mpu().datapath().p()
    }

    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.system.mpu().address()
    }

    /// Name of the micro-state the next clock executes
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        format!("{:?}", self.system.mpu().state())
    }

    /// One-line datapath dump
    pub fn datapath_dump(&self) -> String {
        self.system.mpu().datapath().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.system.cycles() as f64
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.system.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.system.memory_mut().write(addr, value);
    }

    /// Copy a 256-byte page out of memory
    pub fn get_memory_page(&self, page: u8) -> js_sys::Uint8Array {
        let start = (page as usize) << 8;
        js_sys::Uint8Array::from(&self.system.memory().as_slice()[start..start + 256])
    }

    /// Load a program into memory and point PC at it
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) -> Result<(), JsError> {
        self.system
            .memory_mut()
            .load(start_addr, program)
            .map_err(|e| JsError::new(&e.to_string()))?;
        self.program_start = start_addr;
        self.reset();
        Ok(())
    }

    /// Load a hex-text image at address 0 and return the byte count
    pub fn load_hex(&mut self, text: &str) -> Result<u32, JsError> {
        let count = self
            .system
            .memory_mut()
            .load_hex(text)
            .map_err(|e| JsError::new(&e.to_string()))?;
        self.program_start = 0x0000;
        self.reset();
        Ok(count as u32)
    }
}

impl Emulator6502 {
    fn notify(&self, cycle: &BusCycle) {
        notify_write(self.on_write.as_ref(), cycle);
    }
}

fn notify_write(listener: Option<&js_sys::Function>, cycle: &BusCycle) {
    if cycle.rw != ReadWrite::Write {
        return;
    }
    if let Some(listener) = listener {
        let _ = listener.call2(
            &JsValue::NULL,
            &JsValue::from(cycle.address),
            &JsValue::from(cycle.data),
        );
    }
}

impl From<BusCycle> for BusTransaction {
    fn from(cycle: BusCycle) -> Self {
        BusTransaction {
            address: cycle.address,
            data: cycle.data,
            write: cycle.rw == ReadWrite::Write,
        }
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}
