use alloc::boxed::Box;

use derive_more::{Deref, DerefMut};

/// Fixed-length block of zeroed `i32` slots.
///
/// The block never changes size: callers that need more room allocate a
/// new `SlotBuffer` and copy across. Dropping it releases the block.
#[repr(transparent)]
#[derive(Clone, Deref, DerefMut)]
#[deref(forward)]
#[deref_mut(forward)]
pub struct SlotBuffer(Box<[i32]>);

impl SlotBuffer {
    pub fn alloc_zeroed(len: usize) -> Self {
        SlotBuffer(bytemuck::allocation::zeroed_slice_box(len))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::SlotBuffer;

    #[test]
    fn alloc_zeroed_has_requested_len() {
        let buf = SlotBuffer::alloc_zeroed(4);
        assert_eq!(buf.len(), 4);
        assert_eq!(&buf[..], &[0, 0, 0, 0]);
    }

    #[test]
    fn alloc_zero_len() {
        let buf = SlotBuffer::alloc_zeroed(0);
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn clone_does_not_alias() {
        let mut a = SlotBuffer::alloc_zeroed(2);
        a[0] = 7;

        let mut b = a.clone();
        b[0] = 9;

        assert_eq!(a[0], 7);
        assert_eq!(b[0], 9);
    }
}
