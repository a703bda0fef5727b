//! An owning, resizable array of [`Contact`] records.
//!
//! Storage is a single heap block of `Box<Contact>` slots managed through
//! `std::alloc`. Appends double the block when it is full, pops halve it once
//! fewer than half the slots are live, and positional removal rebuilds the
//! block at exactly the remaining length.

use std::alloc::{Layout, alloc, dealloc, realloc};
use std::fmt;
use std::io::{self, Write};
use std::marker::PhantomData;
use std::ptr::{self, NonNull};
use std::slice;

use log::{debug, trace, warn};

mod contact;
mod error;

pub use contact::Contact;
pub use error::{ListError, PushError, Result};

type Slot = Box<Contact>;

/// Dynamic array that owns every contact it holds.
pub struct DynamicArray {
    ptr: NonNull<Slot>,
    cap: usize,
    len: usize,
    _marker: PhantomData<Slot>,
}

// SAFETY: the array uniquely owns its slots, and `Contact` is plain data
unsafe impl Send for DynamicArray {}
// SAFETY: `&DynamicArray` only hands out shared references to the contacts
unsafe impl Sync for DynamicArray {}

impl DynamicArray {
    /// Creates an empty array with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(ListError::InvalidArgument(
                "initial capacity must be positive".to_string(),
            ));
        }

        let ptr = allocate(capacity)?;
        debug!("create: capacity {capacity}");

        Ok(Self {
            ptr,
            cap: capacity,
            len: 0,
            _marker: PhantomData,
        })
    }

    /// Number of live contacts
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// True when no contact is held
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a contact, growing the store first if every slot is taken.
    pub fn push(&mut self, contact: Contact) -> std::result::Result<(), PushError> {
        self.push_boxed(Box::new(contact))
    }

    /// Like [`push`](Self::push) for an already boxed contact. On failure the
    /// box is handed back inside the error and the array is unchanged.
    pub fn push_boxed(&mut self, contact: Box<Contact>) -> std::result::Result<(), PushError> {
        if self.len == self.cap {
            let old_cap = self.cap;
            let new_cap = match grown_capacity(old_cap) {
                Some(cap) => cap,
                // doubling overflowed, report the saturated request
                None => {
                    return Err(PushError::new(
                        contact,
                        ListError::Allocation { capacity: usize::MAX },
                    ));
                }
            };
            if let Err(err) = self.resize(new_cap) {
                return Err(PushError::new(contact, err));
            }
            debug!("grow: capacity {old_cap} -> {new_cap}");
        }

        unsafe {
            // SAFETY: len < cap, so the slot is allocated and unused
            ptr::write(self.ptr.as_ptr().add(self.len), contact);
        }
        self.len += 1;
        trace!("push: length {}", self.len);
        Ok(())
    }

    /// Removes and returns the last contact.
    ///
    /// Halves the store once fewer than half of the slots are live. A failed
    /// shrink leaves the larger store in place; the pop itself still succeeds.
    pub fn pop_back(&mut self) -> Result<Box<Contact>> {
        if self.len == 0 {
            return Err(ListError::EmptyCollection);
        }

        self.len -= 1;
        let contact = unsafe {
            // SAFETY: the slot at the old `len - 1` is initialized and is now
            // outside the live range, so it is read exactly once
            ptr::read(self.ptr.as_ptr().add(self.len))
        };

        let half = self.cap / 2;
        if half >= 1 && self.len < half {
            let old_cap = self.cap;
            match self.resize(half) {
                Ok(()) => debug!("shrink: capacity {old_cap} -> {half}"),
                Err(err) => warn!("shrink: keeping capacity {old_cap}: {err}"),
            }
        }

        Ok(contact)
    }

    /// Removes and returns the contact at `index`, keeping the order of the
    /// rest.
    ///
    /// `index == len()` is the same as [`pop_back`](Self::pop_back). Any
    /// other removal moves the survivors into a new store of exactly
    /// `len() - 1` slots.
    pub fn remove_at(&mut self, index: usize) -> Result<Box<Contact>> {
        if index > self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        if index == self.len {
            return self.pop_back();
        }

        let new_cap = self.len - 1;
        let new_ptr = if new_cap == 0 {
            NonNull::dangling()
        } else {
            allocate(new_cap)?
        };

        let old = self.ptr.as_ptr();
        let removed = unsafe {
            // SAFETY: the stores are distinct allocations, index < len, and
            // every live slot is moved out exactly once
            ptr::copy_nonoverlapping(old, new_ptr.as_ptr(), index);
            ptr::copy_nonoverlapping(
                old.add(index + 1),
                new_ptr.as_ptr().add(index),
                self.len - index - 1,
            );
            ptr::read(old.add(index))
        };

        let old_cap = self.cap;
        self.release();
        self.ptr = new_ptr;
        self.cap = new_cap;
        self.len -= 1;
        debug!("rebuild: removed index {index}, capacity {old_cap} -> {new_cap}");

        Ok(removed)
    }

    /// Borrows the contact at `index`.
    pub fn get(&self, index: usize) -> Result<&Contact> {
        self.slots()
            .get(index)
            .map(|slot| &**slot)
            .ok_or(ListError::IndexOutOfBounds {
                index,
                length: self.len,
            })
    }

    /// Index of the first contact whose name equals `name`.
    pub fn search(&self, name: &str) -> Option<usize> {
        self.slots().iter().position(|slot| slot.name() == name)
    }

    /// Lazily walks `(id, name)` for every live contact in index order.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.slots().iter(),
        }
    }

    /// Writes one `id, name` line per contact.
    pub fn print_all<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for slot in self.slots() {
            writeln!(out, "{slot}")?;
        }
        Ok(())
    }

    /// Drops every contact in index order, then frees the store.
    pub fn destroy(self) {
        debug!("destroy: releasing {} contacts", self.len);
        drop(self);
    }

    fn slots(&self) -> &[Slot] {
        // SAFETY: the first `len` slots are initialized; a dangling pointer is
        // only ever paired with `len == 0`
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Reallocates the store to `new_cap` slots. Requires `len <= new_cap`
    /// and `new_cap > 0`. On failure the old store is untouched.
    fn resize(&mut self, new_cap: usize) -> Result<()> {
        debug_assert!(new_cap > 0 && self.len <= new_cap);

        if self.cap == 0 {
            self.ptr = allocate(new_cap)?;
            self.cap = new_cap;
            return Ok(());
        }

        let failed = ListError::Allocation { capacity: new_cap };
        let new_layout = Layout::array::<Slot>(new_cap).map_err(|_| failed.clone())?;
        let old_layout = Layout::array::<Slot>(self.cap).map_err(|_| failed.clone())?;

        let new_ptr = unsafe {
            // SAFETY: ptr was allocated with old_layout and new size is non-zero
            realloc(self.ptr.as_ptr() as *mut u8, old_layout, new_layout.size())
        };

        self.ptr = NonNull::new(new_ptr as *mut Slot).ok_or(failed)?;
        self.cap = new_cap;
        Ok(())
    }

    /// Frees the store without touching the slots.
    fn release(&mut self) {
        if self.cap == 0 {
            return;
        }
        if let Ok(layout) = Layout::array::<Slot>(self.cap) {
            unsafe {
                // SAFETY: the store was allocated with this layout
                dealloc(self.ptr.as_ptr() as *mut u8, layout);
            }
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }
}

/// Capacity after one growth step, `None` when doubling overflows.
fn grown_capacity(cap: usize) -> Option<usize> {
    cap.checked_mul(2).map(|cap| cap.max(1))
}

fn allocate(capacity: usize) -> Result<NonNull<Slot>> {
    let failed = ListError::Allocation { capacity };
    let layout = Layout::array::<Slot>(capacity).map_err(|_| failed.clone())?;
    if layout.size() == 0 {
        return Err(failed);
    }

    let ptr = unsafe { alloc(layout) };
    NonNull::new(ptr as *mut Slot).ok_or(failed)
}

impl Drop for DynamicArray {
    fn drop(&mut self) {
        unsafe {
            // SAFETY: the first `len` slots are initialized and owned
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
        }
        self.len = 0;
        self.release();
    }
}

impl fmt::Debug for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("length", &self.len)
            .field("capacity", &self.cap)
            .field("contacts", &self.slots())
            .finish()
    }
}

/// Iterator returned by [`DynamicArray::entries`].
#[derive(Clone)]
pub struct Entries<'a> {
    inner: slice::Iter<'a, Slot>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (u64, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|slot| (slot.id(), slot.name()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}
