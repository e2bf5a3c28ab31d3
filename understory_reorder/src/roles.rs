// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item roles during a drag, for hosts that style the source and target.

bitflags::bitflags! {
    /// What part an item plays in the current drag.
    ///
    /// An item hovering over itself is both emitter and receiver.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemRoles: u8 {
        /// The item being dragged.
        const EMITTER  = 0b0000_0001;
        /// The item currently under the pointer.
        const RECEIVER = 0b0000_0010;
    }
}

impl ItemRoles {
    /// Roles of `index` given the active and hovered indices.
    #[must_use]
    pub fn of(index: usize, active: Option<usize>, hover: Option<usize>) -> Self {
        let mut roles = Self::empty();
        roles.set(Self::EMITTER, active == Some(index));
        roles.set(Self::RECEIVER, hover == Some(index));
        roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_follow_indices() {
        assert_eq!(ItemRoles::of(0, None, None), ItemRoles::empty());
        assert_eq!(ItemRoles::of(1, Some(1), Some(3)), ItemRoles::EMITTER);
        assert_eq!(ItemRoles::of(3, Some(1), Some(3)), ItemRoles::RECEIVER);
        assert_eq!(
            ItemRoles::of(2, Some(2), Some(2)),
            ItemRoles::EMITTER | ItemRoles::RECEIVER
        );
    }
}
