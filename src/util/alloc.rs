use std::cell::{Cell, RefCell};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::rc::Rc;

use crate::alloc::{AllocError, Allocator, Global, ReserveError};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CountedDrop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

/// A value that counts its drops and panics once `fuse` runs out of clones.
#[derive(Debug)]
pub struct PanicOnClone {
    pub fuse: Rc<Cell<usize>>,
    pub counter: CountedDrop,
}

impl PanicOnClone {
    pub fn new(fuse: &Rc<Cell<usize>>, counter: &CountedDrop) -> PanicOnClone {
        PanicOnClone {
            fuse: fuse.clone(),
            counter: counter.clone(),
        }
    }
}

impl Clone for PanicOnClone {
    fn clone(&self) -> Self {
        match self.fuse.get() {
            0 => panic!("PanicOnClone fuse ran out"),
            left => self.fuse.set(left - 1),
        }
        PanicOnClone::new(&self.fuse, &self.counter)
    }
}

thread_local! {
    pub static DEFAULT_FUSE: Cell<usize> = const { Cell::new(usize::MAX) };
    pub static DEFAULT_DROPS: Cell<usize> = const { Cell::new(0) };
}

/// Like [`PanicOnClone`], but for [`Default`]. The fuse and drop count are thread local, so each
/// test thread sees its own.
#[derive(Debug)]
pub struct PanicOnDefault;

impl PanicOnDefault {
    pub fn arm(fuse: usize) {
        DEFAULT_FUSE.set(fuse);
        DEFAULT_DROPS.set(0);
    }

    pub fn drops() -> usize {
        DEFAULT_DROPS.get()
    }
}

impl Default for PanicOnDefault {
    fn default() -> Self {
        match DEFAULT_FUSE.get() {
            0 => panic!("PanicOnDefault fuse ran out"),
            left => DEFAULT_FUSE.set(left - 1),
        }
        PanicOnDefault
    }
}

impl Drop for PanicOnDefault {
    fn drop(&mut self) {
        DEFAULT_DROPS.set(DEFAULT_DROPS.get() + 1);
    }
}

#[derive(Debug, Default)]
pub struct AllocStats {
    pub live: Cell<usize>,
    pub allocations: Cell<usize>,
    pub constructed: Cell<usize>,
    pub destroyed: Cell<usize>,
    pub fail_after: Cell<Option<usize>>,
}

/// An allocation strategy which counts buffers and element operations, delegating the actual
/// allocation to [`Global`]. Copies share their counters.
#[derive(Debug, Default, Clone)]
pub struct TrackingAlloc(pub Rc<AllocStats>);

impl TrackingAlloc {
    pub fn new() -> TrackingAlloc {
        TrackingAlloc::default()
    }

    /// Makes every allocation after the next `count` fail.
    pub fn fail_after(&self, count: usize) {
        self.0.fail_after.set(Some(count));
    }

    pub fn live(&self) -> usize {
        self.0.live.get()
    }

    pub fn allocations(&self) -> usize {
        self.0.allocations.get()
    }

    pub fn constructed(&self) -> usize {
        self.0.constructed.get()
    }

    pub fn destroyed(&self) -> usize {
        self.0.destroyed.get()
    }
}

// SAFETY: All memory is obtained from and returned to Global, which upholds the safety contract.
unsafe impl Allocator for TrackingAlloc {
    fn allocate<T>(&self, count: usize) -> Result<NonNull<T>, ReserveError> {
        match self.0.fail_after.get() {
            Some(0) => {
                let layout = Global::make_layout::<T>(count)?;
                return Err(AllocError { layout }.into());
            },
            Some(left) => self.0.fail_after.set(Some(left - 1)),
            None => (),
        }

        let ptr = Global.allocate(count)?;
        self.0.live.set(self.0.live.get() + 1);
        self.0.allocations.set(self.0.allocations.get() + 1);
        Ok(ptr)
    }

    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, count: usize) {
        self.0.live.set(self.0.live.get() - 1);
        // SAFETY: ptr was allocated by Global with the same count.
        unsafe { Global.deallocate(ptr, count) }
    }

    unsafe fn construct<T>(&self, ptr: NonNull<T>, value: T) {
        self.0.constructed.set(self.0.constructed.get() + 1);
        // SAFETY: Passed on to the caller.
        unsafe { ptr.write(value) }
    }

    unsafe fn destroy<T>(&self, ptr: NonNull<T>) {
        self.0.destroyed.set(self.0.destroyed.get() + 1);
        // SAFETY: Passed on to the caller.
        unsafe { std::ptr::drop_in_place(ptr.as_ptr()) }
    }
}
