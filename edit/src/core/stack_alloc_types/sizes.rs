// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Be very careful when adjusting these tuning parameters. The rule of thumb is
//! that smaller static allocation sizes are better than larger. There is a
//! tradeoff between pre-allocating large amounts of memory and allocating small
//! amounts (on the heap) as you need it. Huge stack allocations can cause stack
//! overflow errors.

use smallstr::SmallString;
use smallvec::SmallVec;

pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Stack allocated string storage for small strings. When this gets larger than
/// [`DEFAULT_STRING_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`]
/// on the heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the heap
/// if it gets larger than [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;

/// Stack allocated string storage for small documents. When this gets larger
/// than [`DEFAULT_DOCUMENT_SIZE`], it will be [`smallvec::SmallVec::spilled`]
/// on the heap.
pub type DocumentStorage = SmallString<[u8; DEFAULT_DOCUMENT_SIZE]>;
/// 4KB, or approximately 65 lines of text (assuming 60 chars per line). This
/// matches the typical Linux page size.
pub const DEFAULT_DOCUMENT_SIZE: usize = 4096;
