use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::ptr;

use libc::{c_char, c_uint};

/// Counts the live heap allocations of the current thread.
struct Tracking;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
    static WATCHED: Cell<(usize, usize)> = const { Cell::new((0, 0)) };
}

fn track(delta: isize) {
    let _ = LIVE.try_with(|live| live.set(live.get() + delta));
}

unsafe impl GlobalAlloc for Tracking {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let p = System.alloc(layout);

        if !p.is_null() {
            track(1);
        }

        p
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let p = System.alloc_zeroed(layout);

        if !p.is_null() {
            track(1);
        }

        p
    }

    unsafe fn dealloc(&self, p: *mut u8, layout: Layout) {
        System.dealloc(p, layout);

        track(-1);
    }
}

#[global_allocator]
static GLOBAL: Tracking = Tracking;

/// Runs `f`, returning its result and the number of allocations it left alive on this thread.
pub fn allocations_during<F: FnOnce() -> R, R>(f: F) -> (R, isize) {
    let before = LIVE.with(Cell::get);
    let res = f();
    let after = LIVE.with(Cell::get);

    (res, after - before)
}

/// Copies `s` into a `malloc`-ed buffer, the way a host hands text over.
pub fn malloc_str(s: &str) -> (*const c_char, c_uint) {
    unsafe {
        let p = libc::malloc(s.len().max(1)) as *mut u8;

        assert!(!p.is_null());

        ptr::copy_nonoverlapping(s.as_ptr(), p, s.len());

        (p as *const c_char, s.len() as c_uint)
    }
}

/// Starts counting how often the host buffer at `p` gets released.
pub fn watch_free(p: *const c_char) {
    WATCHED.with(|watched| watched.set((p as usize, 0)));
}

/// The number of releases of the watched buffer since `watch_free`.
pub fn watched_frees() -> usize {
    WATCHED.with(|watched| watched.get().1)
}

pub(crate) fn note_free(p: *const u8) {
    let _ = WATCHED.try_with(|watched| {
        let (addr, count) = watched.get();

        if addr != 0 && addr == p as usize {
            watched.set((addr, count + 1));
        }
    });
}
