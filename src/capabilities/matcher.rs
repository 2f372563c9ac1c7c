// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Capability matching.
//!
//! Two capabilities "match" when they refer to the same kind of resource for
//! dependency purposes:
//!
//! | Left / Right | Rule |
//! |--------------|------|
//! | content / content | kinds equal |
//! | annotation / annotation | bounds equal **and** (kinds equal or either kind is `*`) |
//! | group / group | kinds equal or either kind is `*` |
//! | anything else | never |
//!
//! Content kinds have no wildcard form.

use crate::capabilities::Capability;
use crate::config::consts::WILDCARD;

/// Decide whether two capabilities denote the same resource.
///
/// # Examples
/// ```
/// use stage_orderer::capabilities::{capabilities_match, Capability};
///
/// let foo = Capability::annotation("Foo", "span");
/// let any = Capability::annotation("*", "span");
/// let any_content = Capability::annotation("*", "content");
///
/// assert!(capabilities_match(&foo, &any));
/// assert!(capabilities_match(&any, &foo));
/// assert!(!capabilities_match(&foo, &any_content));
/// assert!(!capabilities_match(&foo, &Capability::group("Foo")));
/// ```
pub fn capabilities_match(left: &Capability, right: &Capability) -> bool {
    if std::ptr::eq(left, right) {
        return true;
    }

    match (left, right) {
        (Capability::Content { kind: a }, Capability::Content { kind: b }) => a == b,
        (
            Capability::Annotation {
                kind: a,
                bounds: a_bounds,
            },
            Capability::Annotation {
                kind: b,
                bounds: b_bounds,
            },
        ) => a_bounds == b_bounds && kinds_match(a, b),
        (Capability::Group { kind: a }, Capability::Group { kind: b }) => kinds_match(a, b),
        _ => false,
    }
}

fn kinds_match(a: &str, b: &str) -> bool {
    a == b || a == WILDCARD || b == WILDCARD
}
