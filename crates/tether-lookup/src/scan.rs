//! Shared scan primitives

use tether_model::{BackingHandle, TypeTag};

/// First handle carrying exactly `tag`.
pub(crate) fn first_match(handles: &[BackingHandle], tag: TypeTag) -> Option<BackingHandle> {
    handles
        .iter()
        .find(|handle| handle.type_tag() == Some(tag))
        .cloned()
}

/// All handles carrying exactly `tag`, enumeration order, exact capacity.
pub(crate) fn all_matches(handles: &[BackingHandle], tag: TypeTag) -> Vec<BackingHandle> {
    let count = handles
        .iter()
        .filter(|handle| handle.type_tag() == Some(tag))
        .count();

    let mut found = Vec::with_capacity(count);
    for handle in handles {
        if handle.type_tag() == Some(tag) {
            found.push(BackingHandle::clone(handle));
        }
    }
    found
}

/// First handle carrying any tag.
pub(crate) fn first_tagged(handles: &[BackingHandle]) -> Option<BackingHandle> {
    handles
        .iter()
        .find(|handle| handle.type_tag().is_some())
        .cloned()
}

/// All handles carrying any tag, enumeration order, exact capacity.
pub(crate) fn all_tagged(handles: &[BackingHandle]) -> Vec<BackingHandle> {
    let count = handles
        .iter()
        .filter(|handle| handle.type_tag().is_some())
        .count();

    let mut found = Vec::with_capacity(count);
    for handle in handles {
        if handle.type_tag().is_some() {
            found.push(BackingHandle::clone(handle));
        }
    }
    found
}
