//! Exclusive-selection group coordinator.
//!
//! One in-process coordinator owns every registered member, keyed by group
//! identifier. Mutual exclusion is enforced by explicit message passing inside
//! [`select`](SelectionCoordinator::select) rather than an ambient broadcast
//! bus, so membership stays explicit and testable. Membership is dynamic:
//! controls register on attach and deregister on detach, and group sets are
//! recomputed from the live member list on every operation.

use thiserror::Error;

use crate::model::{MemberId, MemberRecord, SelectionChanged};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Coordinator errors for invalid member interactions.
pub enum SelectionError {
    /// The member id is not registered.
    #[error("group member not registered")]
    MemberNotFound,
    /// The member is disabled and excluded from interaction.
    #[error("group member is disabled")]
    MemberDisabled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Coordinates mutual exclusion and cyclic keyboard navigation over all
/// registered exclusive-selection members.
pub struct SelectionCoordinator {
    next_id: u64,
    members: Vec<MemberRecord>,
}

impl SelectionCoordinator {
    /// Registers a member and returns its id.
    ///
    /// An empty group identifier is normalized to `None`; such members behave
    /// as singleton groups. Registering a selected member clears any prior
    /// selection in its group so the exclusivity invariant holds from the
    /// first observable instant.
    pub fn register(
        &mut self,
        group: Option<String>,
        value: impl Into<String>,
        selected: bool,
        disabled: bool,
    ) -> MemberId {
        let group = group.filter(|group| !group.is_empty());
        self.next_id = self.next_id.saturating_add(1);
        let id = MemberId(self.next_id);

        if selected {
            if let Some(group) = group.as_deref() {
                for member in &mut self.members {
                    if member.group.as_deref() == Some(group) {
                        member.selected = false;
                    }
                }
            }
        }

        self.members.push(MemberRecord {
            id,
            group,
            value: value.into(),
            selected,
            disabled,
        });
        id
    }

    /// Removes a member from the discoverable set. Returns `false` when the
    /// id was not registered.
    pub fn deregister(&mut self, id: MemberId) -> bool {
        let before = self.members.len();
        self.members.retain(|member| member.id != id);
        self.members.len() != before
    }

    /// Toggles the disabled flag independently of selection state.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::MemberNotFound`] for unregistered ids.
    pub fn set_disabled(&mut self, id: MemberId, disabled: bool) -> Result<(), SelectionError> {
        let member = self
            .members
            .iter_mut()
            .find(|member| member.id == id)
            .ok_or(SelectionError::MemberNotFound)?;
        member.disabled = disabled;
        Ok(())
    }

    /// Selects a member and clears every other member of its group.
    ///
    /// Returns the change notification, or `None` when the member already
    /// held the selection.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::MemberNotFound`] for unregistered ids and
    /// [`SelectionError::MemberDisabled`] for disabled members.
    pub fn select(&mut self, id: MemberId) -> Result<Option<SelectionChanged>, SelectionError> {
        let member = self
            .members
            .iter()
            .find(|member| member.id == id)
            .ok_or(SelectionError::MemberNotFound)?;
        if member.disabled {
            return Err(SelectionError::MemberDisabled);
        }
        if member.selected {
            return Ok(None);
        }

        let group = member.group.clone();
        let value = member.value.clone();
        let previous = group.as_deref().and_then(|group| {
            self.members
                .iter()
                .find(|member| member.group.as_deref() == Some(group) && member.selected)
                .map(|member| member.value.clone())
        });

        for member in &mut self.members {
            let in_group = match group.as_deref() {
                Some(group) => member.group.as_deref() == Some(group),
                None => member.id == id,
            };
            if in_group {
                member.selected = member.id == id;
            }
        }

        Ok(Some(SelectionChanged {
            group,
            value,
            previous,
        }))
    }

    /// Moves the selection to the next enabled member of the group, wrapping
    /// at the end and skipping disabled members.
    ///
    /// # Errors
    ///
    /// Same contract as [`select`](Self::select); navigating from a disabled
    /// member is an error.
    pub fn navigate_next(
        &mut self,
        id: MemberId,
    ) -> Result<Option<SelectionChanged>, SelectionError> {
        self.navigate(id, true)
    }

    /// Moves the selection to the previous enabled member of the group,
    /// wrapping at the start and skipping disabled members.
    ///
    /// # Errors
    ///
    /// Same contract as [`select`](Self::select).
    pub fn navigate_previous(
        &mut self,
        id: MemberId,
    ) -> Result<Option<SelectionChanged>, SelectionError> {
        self.navigate(id, false)
    }

    fn navigate(
        &mut self,
        id: MemberId,
        forward: bool,
    ) -> Result<Option<SelectionChanged>, SelectionError> {
        let member = self
            .members
            .iter()
            .find(|member| member.id == id)
            .ok_or(SelectionError::MemberNotFound)?;
        if member.disabled {
            return Err(SelectionError::MemberDisabled);
        }
        let Some(group) = member.group.clone() else {
            // Singleton group: nowhere to navigate.
            return Ok(None);
        };

        // Ordinal positions follow registration order of the live set.
        let peers: Vec<(MemberId, bool)> = self
            .members
            .iter()
            .filter(|member| member.group.as_deref() == Some(group.as_str()))
            .map(|member| (member.id, member.disabled))
            .collect();
        let Some(position) = peers.iter().position(|(peer, _)| *peer == id) else {
            return Err(SelectionError::MemberNotFound);
        };

        let len = peers.len();
        for offset in 1..len {
            let index = if forward {
                (position + offset) % len
            } else {
                (position + len - offset) % len
            };
            let (candidate, disabled) = peers[index];
            if disabled {
                continue;
            }
            return self.select(candidate);
        }

        // Every other member is disabled; selection is unchanged.
        Ok(None)
    }

    /// Returns the member record for an id.
    pub fn member(&self, id: MemberId) -> Option<&MemberRecord> {
        self.members.iter().find(|member| member.id == id)
    }

    /// Whether a member currently holds its group's selection.
    pub fn is_selected(&self, id: MemberId) -> bool {
        self.member(id).map(|member| member.selected).unwrap_or(false)
    }

    /// Members of a group in registration order.
    pub fn members_of(&self, group: &str) -> Vec<&MemberRecord> {
        self.members
            .iter()
            .filter(|member| member.group.as_deref() == Some(group))
            .collect()
    }

    /// The selected value of a group, if any member holds the selection.
    pub fn selected_value(&self, group: &str) -> Option<&str> {
        self.members
            .iter()
            .find(|member| member.group.as_deref() == Some(group) && member.selected)
            .map(|member| member.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn theme_group(coordinator: &mut SelectionCoordinator) -> (MemberId, MemberId) {
        let light = coordinator.register(Some("theme".into()), "light", true, false);
        let dark = coordinator.register(Some("theme".into()), "dark", false, false);
        (light, dark)
    }

    #[test]
    fn select_moves_selection_and_notifies_once() {
        let mut coordinator = SelectionCoordinator::default();
        let (light, dark) = theme_group(&mut coordinator);

        let change = coordinator.select(dark).expect("select dark");
        assert_eq!(
            change,
            Some(SelectionChanged {
                group: Some("theme".into()),
                value: "dark".into(),
                previous: Some("light".into()),
            })
        );
        assert!(!coordinator.is_selected(light));
        assert!(coordinator.is_selected(dark));
        assert_eq!(coordinator.selected_value("theme"), Some("dark"));
    }

    #[test]
    fn selecting_the_selected_member_is_silent() {
        let mut coordinator = SelectionCoordinator::default();
        let (light, _) = theme_group(&mut coordinator);
        assert_eq!(coordinator.select(light).expect("select"), None);
    }

    #[test]
    fn disabled_and_unregistered_members_cannot_be_selected() {
        let mut coordinator = SelectionCoordinator::default();
        let off = coordinator.register(Some("power".into()), "off", false, true);
        assert_eq!(coordinator.select(off), Err(SelectionError::MemberDisabled));

        let ghost = MemberId(999);
        assert_eq!(
            coordinator.select(ghost),
            Err(SelectionError::MemberNotFound)
        );
    }

    #[test]
    fn disabling_keeps_prior_selection_for_display() {
        let mut coordinator = SelectionCoordinator::default();
        let (light, _) = theme_group(&mut coordinator);

        coordinator.set_disabled(light, true).expect("disable");
        assert!(coordinator.is_selected(light));
        assert_eq!(coordinator.select(light), Err(SelectionError::MemberDisabled));
    }

    #[test]
    fn navigation_skips_disabled_members() {
        let mut coordinator = SelectionCoordinator::default();
        let small = coordinator.register(Some("size".into()), "small", true, false);
        let medium = coordinator.register(Some("size".into()), "medium", false, true);
        let large = coordinator.register(Some("size".into()), "large", false, false);

        let change = coordinator.navigate_next(small).expect("navigate");
        assert_eq!(
            change.map(|change| change.value),
            Some("large".to_string())
        );
        assert!(coordinator.is_selected(large));
        assert!(!coordinator.member(medium).expect("medium").selected);
    }

    #[test]
    fn navigation_is_cyclically_closed() {
        let mut coordinator = SelectionCoordinator::default();
        let a = coordinator.register(Some("align".into()), "start", true, false);
        let b = coordinator.register(Some("align".into()), "center", false, false);
        let c = coordinator.register(Some("align".into()), "end", false, false);

        for expected in ["center", "end", "start"] {
            let current = [a, b, c]
                .into_iter()
                .find(|id| coordinator.is_selected(*id))
                .expect("one selected");
            let change = coordinator.navigate_next(current).expect("navigate");
            assert_eq!(change.map(|change| change.value), Some(expected.to_string()));
        }
        assert_eq!(coordinator.selected_value("align"), Some("start"));
    }

    #[test]
    fn navigate_previous_wraps_to_the_end() {
        let mut coordinator = SelectionCoordinator::default();
        let first = coordinator.register(Some("tab".into()), "one", true, false);
        let _middle = coordinator.register(Some("tab".into()), "two", false, false);
        let last = coordinator.register(Some("tab".into()), "three", false, false);

        coordinator.navigate_previous(first).expect("navigate");
        assert!(coordinator.is_selected(last));
    }

    #[test]
    fn navigation_is_noop_when_all_other_members_disabled() {
        let mut coordinator = SelectionCoordinator::default();
        let only = coordinator.register(Some("solo".into()), "a", true, false);
        coordinator.register(Some("solo".into()), "b", false, true);
        coordinator.register(Some("solo".into()), "c", false, true);

        assert_eq!(coordinator.navigate_next(only).expect("navigate"), None);
        assert_eq!(coordinator.selected_value("solo"), Some("a"));
    }

    #[test]
    fn ungrouped_members_are_singleton_groups() {
        let mut coordinator = SelectionCoordinator::default();
        let lone = coordinator.register(None, "lone", false, false);
        let other = coordinator.register(Some(String::new()), "other", true, false);

        let change = coordinator.select(lone).expect("select lone");
        assert_eq!(
            change,
            Some(SelectionChanged {
                group: None,
                value: "lone".into(),
                previous: None,
            })
        );
        // The empty-group member is untouched and navigation goes nowhere.
        assert!(coordinator.is_selected(other));
        assert_eq!(coordinator.navigate_next(lone).expect("navigate"), None);
    }

    #[test]
    fn deregistered_members_leave_the_discoverable_set() {
        let mut coordinator = SelectionCoordinator::default();
        let a = coordinator.register(Some("g".into()), "a", true, false);
        let b = coordinator.register(Some("g".into()), "b", false, false);
        let c = coordinator.register(Some("g".into()), "c", false, false);

        assert!(coordinator.deregister(b));
        assert!(!coordinator.deregister(b));

        let change = coordinator.navigate_next(a).expect("navigate");
        assert_eq!(change.map(|change| change.value), Some("c".to_string()));
        assert_eq!(coordinator.members_of("g").len(), 2);
        assert!(coordinator.is_selected(c));
    }

    #[test]
    fn registering_a_selected_member_wins_over_prior_selection() {
        let mut coordinator = SelectionCoordinator::default();
        let (light, _) = theme_group(&mut coordinator);
        let system = coordinator.register(Some("theme".into()), "system", true, false);

        assert!(!coordinator.is_selected(light));
        assert!(coordinator.is_selected(system));
        assert_eq!(coordinator.selected_value("theme"), Some("system"));
    }
}
