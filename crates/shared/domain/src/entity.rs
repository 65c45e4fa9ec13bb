//! Entity base: identity plus an exclusively owned props record.
//!
//! Domain types hold an [`Entity`] as a field rather than extending it, and
//! get identity-based equality from it.

use chrono::{DateTime, Utc};

use crate::identity::UniqueEntityId;

/// Creation and last-modification instants carried by entity props
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Timestamps {
    /// Fill in whichever timestamps were not supplied with the current instant
    pub fn resolve(created_at: Option<DateTime<Utc>>, updated_at: Option<DateTime<Utc>>) -> Self {
        let now = Utc::now();
        Self {
            created_at: created_at.unwrap_or(now),
            updated_at: updated_at.unwrap_or(now),
        }
    }
}

/// Props records that carry [`Timestamps`]
pub trait Timestamped {
    fn timestamps(&self) -> &Timestamps;
    fn timestamps_mut(&mut self) -> &mut Timestamps;
}

/// Generic entity wrapper.
///
/// Two entities are equal when their ids are equal; props content is
/// never compared.
#[derive(Debug, Clone)]
pub struct Entity<P> {
    id: UniqueEntityId,
    props: P,
}

impl<P> Entity<P> {
    /// Wrap props with the given id, generating one when absent
    pub fn new(props: P, id: Option<UniqueEntityId>) -> Self {
        Self {
            id: id.unwrap_or_else(UniqueEntityId::generate),
            props,
        }
    }

    pub fn id(&self) -> &UniqueEntityId {
        &self.id
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    pub(crate) fn props_mut(&mut self) -> &mut P {
        &mut self.props
    }

    pub fn equals(&self, other: &Entity<P>) -> bool {
        std::ptr::eq(self, other) || self.id == other.id
    }
}

impl<P: Timestamped> Entity<P> {
    pub fn created_at(&self) -> DateTime<Utc> {
        self.props.timestamps().created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.props.timestamps().updated_at
    }

    /// Record a mutation by moving `updated_at` to now
    pub(crate) fn touch(&mut self) {
        self.props.timestamps_mut().updated_at = Utc::now();
    }
}

impl<P> PartialEq for Entity<P> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<P> Eq for Entity<P> {}

/// Domain types that own an [`Entity`] and therefore an identity
pub trait Identifiable {
    fn id(&self) -> &UniqueEntityId;

    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Props {
        label: String,
        timestamps: Timestamps,
    }

    impl Timestamped for Props {
        fn timestamps(&self) -> &Timestamps {
            &self.timestamps
        }

        fn timestamps_mut(&mut self) -> &mut Timestamps {
            &mut self.timestamps
        }
    }

    fn props(label: &str) -> Props {
        Props {
            label: label.to_string(),
            timestamps: Timestamps::resolve(None, None),
        }
    }

    #[test]
    fn test_generates_id_when_absent() {
        let a = Entity::new(props("a"), None);
        let b = Entity::new(props("a"), None);

        assert_ne!(a.id(), b.id());
        assert!(!a.equals(&b));
    }

    #[test]
    fn test_equality_ignores_props() {
        let id = UniqueEntityId::from_existing("room-1");
        let a = Entity::new(props("a"), Some(id.clone()));
        let b = Entity::new(props("b"), Some(id));

        assert!(a.equals(&b));
        assert_eq!(a, b);
        assert_eq!(b.props().label, "b");
    }

    #[test]
    fn test_equal_to_itself() {
        let a = Entity::new(props("a"), None);
        assert!(a.equals(&a));
    }

    #[test]
    fn test_touch_moves_updated_at_only() {
        let past = Utc::now() - chrono::Duration::days(1);
        let mut entity = Entity::new(
            Props {
                label: "a".to_string(),
                timestamps: Timestamps::resolve(Some(past), Some(past)),
            },
            None,
        );

        entity.touch();

        assert_eq!(entity.created_at(), past);
        assert!(entity.updated_at() > past);
    }
}
