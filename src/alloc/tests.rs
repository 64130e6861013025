#![cfg(test)]

use std::alloc::Layout;
use std::ptr::NonNull;

use super::*;
use crate::util::alloc::{CountedDrop, TrackingAlloc, ZeroSizedType};

#[test]
fn test_global_round_trip() {
    let ptr = Global.allocate::<u64>(3).expect("allocation failed");
    assert!(ptr.is_aligned(), "Allocations should be aligned for T.");

    // SAFETY: ptr is valid for 3 u64s, each slot is written before it is read.
    unsafe {
        for i in 0..3 {
            Global.construct(ptr.add(i), i as u64 * 10);
        }
        assert_eq!(ptr.add(2).read(), 20);
        Global.deallocate(ptr, 3);
    }
}

#[test]
fn test_global_zero_sized() {
    let ptr = Global.allocate::<ZeroSizedType>(usize::MAX).expect("ZSTs shouldn't allocate");
    assert_eq!(ptr, NonNull::dangling());
    // SAFETY: ptr came from allocate with the same count.
    unsafe { Global.deallocate(ptr, usize::MAX) }

    let ptr = Global.allocate::<u32>(0).expect("empty buffers shouldn't allocate");
    assert_eq!(ptr, NonNull::dangling());
    // SAFETY: ptr came from allocate with the same count.
    unsafe { Global.deallocate(ptr, 0) }
}

#[test]
fn test_global_overflow() {
    assert_eq!(
        Global.allocate::<u16>(usize::MAX),
        Err(ReserveError::CapacityOverflow(CapacityOverflow)),
        "Layouts over isize::MAX bytes should be rejected before allocating."
    );
    assert!(Global::make_layout::<u8>(isize::MAX as usize).is_ok());
    assert!(Global::make_layout::<u8>(isize::MAX as usize + 1).is_err());
}

#[test]
fn test_destroy_drops_once() {
    let counter = CountedDrop::new(0);
    let ptr = Global.allocate::<CountedDrop>(1).expect("allocation failed");

    // SAFETY: The slot is constructed before it is destroyed, and released afterwards.
    unsafe {
        Global.construct(ptr, counter.clone());
        assert_eq!(*counter.borrow(), 0);
        Global.destroy(ptr);
        Global.deallocate(ptr, 1);
    }

    assert_eq!(counter.take(), 1, "destroy should drop the value exactly once.");
}

#[test]
fn test_tracking_failure() {
    let alloc = TrackingAlloc::new();
    alloc.fail_after(1);

    let ptr = alloc.allocate::<u8>(4).expect("the first allocation should succeed");
    assert_eq!(alloc.live(), 1);

    let error = alloc.allocate::<u32>(4).expect_err("the second allocation should fail");
    assert_eq!(
        error,
        ReserveError::AllocError(AllocError {
            layout: Layout::new::<[u32; 4]>()
        })
    );
    assert_eq!(error.to_string(), "Memory allocation of 16 bytes failed!");
    assert_eq!(alloc.live(), 1, "A failed allocation shouldn't be counted.");

    // SAFETY: ptr came from allocate with the same count.
    unsafe { alloc.deallocate(ptr, 4) }
    assert_eq!(alloc.live(), 0);
}
