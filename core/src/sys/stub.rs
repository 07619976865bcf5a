//! Scripted [`SocketApi`] for unit tests.

use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use tcptune_common::OptionDescriptor;

use super::{AddressFamily, OsSocket, SocketApi};

const FIRST_HANDLE: OsSocket = 100;

#[derive(Default)]
pub(crate) struct StubSockets {
    startup_error: Option<i32>,
    open_script: Mutex<VecDeque<i32>>,
    get_errors: HashMap<i32, i32>,
    set_errors: HashMap<i32, i32>,
    values: Mutex<HashMap<(OsSocket, i32), i32>>,
    families: Mutex<Vec<AddressFamily>>,
    next_handle: AtomicUsize,
    startups: AtomicUsize,
    cleanups: AtomicUsize,
    closes: AtomicUsize,
    os_calls: AtomicUsize,
}

impl StubSockets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_startup(mut self, code: i32) -> Self {
        self.startup_error = Some(code);
        self
    }

    /// OS error codes returned by the next `open_stream` calls, in order. Once drained every open succeeds.
    pub fn open_errors(self, codes: Vec<i32>) -> Self {
        *self.open_script.lock().unwrap() = codes.into();
        self
    }

    pub fn get_error(mut self, name: i32, code: i32) -> Self {
        self.get_errors.insert(name, code);
        self
    }

    pub fn set_error(mut self, name: i32, code: i32) -> Self {
        self.set_errors.insert(name, code);
        self
    }

    pub fn startups(&self) -> usize {
        self.startups.load(Ordering::SeqCst)
    }

    pub fn cleanups(&self) -> usize {
        self.cleanups.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    /// Successful opens.
    pub fn opened(&self) -> usize {
        self.next_handle.load(Ordering::SeqCst)
    }

    /// Every open, get and set attempt.
    pub fn os_calls(&self) -> usize {
        self.os_calls.load(Ordering::SeqCst)
    }

    pub fn families(&self) -> Vec<AddressFamily> {
        self.families.lock().unwrap().clone()
    }
}

impl SocketApi for StubSockets {
    fn startup(&self) -> io::Result<()> {
        self.startups.fetch_add(1, Ordering::SeqCst);
        match self.startup_error {
            Some(code) => Err(io::Error::from_raw_os_error(code)),
            None => Ok(()),
        }
    }

    fn cleanup(&self) {
        self.cleanups.fetch_add(1, Ordering::SeqCst);
    }

    fn open_stream(&self, family: AddressFamily) -> io::Result<OsSocket> {
        self.os_calls.fetch_add(1, Ordering::SeqCst);
        self.families.lock().unwrap().push(family);

        if let Some(code) = self.open_script.lock().unwrap().pop_front() {
            return Err(io::Error::from_raw_os_error(code));
        }
        let n = self.next_handle.fetch_add(1, Ordering::SeqCst);
        Ok(FIRST_HANDLE + n as OsSocket)
    }

    fn close(&self, _handle: OsSocket) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }

    fn get_int(&self, handle: OsSocket, descriptor: OptionDescriptor) -> io::Result<i32> {
        self.os_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(code) = self.get_errors.get(&descriptor.name) {
            return Err(io::Error::from_raw_os_error(*code));
        }
        let values = self.values.lock().unwrap();
        Ok(values.get(&(handle, descriptor.name)).copied().unwrap_or(0))
    }

    fn set_int(&self, handle: OsSocket, descriptor: OptionDescriptor, value: i32) -> io::Result<()> {
        self.os_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(code) = self.set_errors.get(&descriptor.name) {
            return Err(io::Error::from_raw_os_error(*code));
        }
        self.values.lock().unwrap().insert((handle, descriptor.name), value);
        Ok(())
    }
}
