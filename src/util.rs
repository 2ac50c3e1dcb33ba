use std::slice;

use crate::error::SizeError;

/// \[T\]::as_chunks isn't available on our MSRV, so this is a local copy
pub fn as_chunks<T, const N: usize>(slice: &[T]) -> (&[[T; N]], &[T]) {
    assert!(N != 0, "Cannot split a slice into zero sized arrays.");

    // SAFETY: len * N is always less than or equal to slice.len()
    // len * N is also always guaranteed to be divisible by N
    // thus it is safe to create `len` arrays of length N from that slice
    let len = slice.len() / N;
    let (array_slice, remainder) = slice.split_at(len * N);
    let arrays = unsafe { slice::from_raw_parts(array_slice.as_ptr().cast(), len) };

    (arrays, remainder)
}

/// Cast a slice to a slice of arrays, failing if the slice does not divide evenly
pub fn try_cast_as_arrays<T, const N: usize>(slice: &[T]) -> Result<&[[T; N]], SizeError> {
    let (arrays, rmdr) = as_chunks(slice);
    if !rmdr.is_empty() {
        return Err(SizeError::RaggedSlice {
            len: slice.len(),
            chunk: N,
        });
    }
    Ok(arrays)
}
