use bumpalo::collections::Vec;

/// A context for a GraphQL type system which holds an arena allocator.
///
/// Type definitions reference each other freely and often cyclically, which makes it convenient
/// to allocate all of them in one chunk of memory whose lifetime outlives every reference between
/// them. This context represents that lifetime: all type definitions, the [Schema](super::Schema)
/// built from them, and all of the schema's derived indexes and validation errors live on its
/// arena and are dropped all at once together with the context.
pub struct SchemaContext {
    /// An arena allocator that holds the memory allocated for the Schema Context's lifetime
    pub arena: bumpalo::Bump,
}

impl SchemaContext {
    /// Create a new schema context with a preallocated arena.
    pub fn new() -> Self {
        let arena = bumpalo::Bump::new();
        SchemaContext { arena }
    }

    /// Put the value of `item` onto the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, item: T) -> &T {
        self.arena.alloc(item)
    }

    /// Allocate an `&str` slice onto the arena and return a reference to it.
    ///
    /// This is useful when the original slice has an undefined lifetime.
    /// This is typically unnecessary for static slices (`&'static str`) whose lifetimes are as
    /// long as the running program and don't need to be allocated dynamically.
    #[inline]
    pub fn alloc_str(&self, str: &str) -> &str {
        self.arena.alloc_str(str)
    }

    /// Collect a list of items onto the arena and return the resulting slice.
    #[inline]
    pub fn alloc_slice<T, I>(&self, items: I) -> &[T]
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Vec::new_in(&self.arena);
        list.extend(items);
        list.into_bump_slice()
    }
}

impl Default for SchemaContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_slices() {
        let ctx = SchemaContext::new();
        let names = ctx.alloc_slice(["a", "b", "c"]);
        assert_eq!(names, &["a", "b", "c"]);
        let empty: &[u8] = ctx.alloc_slice(std::iter::empty());
        assert!(empty.is_empty());
        assert_eq!(ctx.alloc_str("name"), "name");
    }
}
