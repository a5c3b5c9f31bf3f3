// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn entity_scope_has_one_member() {
    let scope = Scope::entity(3);
    assert_eq!(scope.entities(), &[3]);
}

#[test]
fn shared_scope_is_sorted_and_deduplicated() {
    let scope = Scope::shared([4, 2, 4, 1]);
    assert_eq!(scope.entities(), &[1, 2, 4]);
}

#[test]
fn empty_shared_scope_falls_back_to_default_entity() {
    let scope = Scope::shared(Vec::new());
    assert_eq!(scope.entities(), &[1]);
}
