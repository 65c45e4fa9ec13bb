//! Hotel domain entity.

use chrono::{DateTime, Utc};

use crate::address::Address;
use crate::entity::{Entity, Identifiable, Timestamped, Timestamps};
use crate::identity::UniqueEntityId;

#[derive(Debug, Clone)]
pub struct HotelProps {
    name: String,
    rating: f64,
    address: Address,
    timestamps: Timestamps,
}

impl Timestamped for HotelProps {
    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }
}

/// Hotel creation data. Timestamps default to now when left empty.
#[derive(Debug, Clone)]
pub struct CreateHotel {
    pub name: String,
    pub rating: f64,
    pub address: Address,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Hotel domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    entity: Entity<HotelProps>,
}

impl Hotel {
    pub fn create(data: CreateHotel, id: Option<UniqueEntityId>) -> Self {
        let props = HotelProps {
            name: data.name,
            rating: data.rating,
            address: data.address,
            timestamps: Timestamps::resolve(data.created_at, data.updated_at),
        };

        Self {
            entity: Entity::new(props, id),
        }
    }

    pub fn id(&self) -> &UniqueEntityId {
        self.entity.id()
    }

    pub fn name(&self) -> &str {
        &self.entity.props().name
    }

    pub fn rating(&self) -> f64 {
        self.entity.props().rating
    }

    pub fn address(&self) -> &Address {
        &self.entity.props().address
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.entity.created_at()
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.entity.updated_at()
    }

    pub fn set_name(&mut self, name: String) {
        self.entity.props_mut().name = name;
        self.entity.touch();
    }

    pub fn set_rating(&mut self, rating: f64) {
        self.entity.props_mut().rating = rating;
        self.entity.touch();
    }

    /// Swap in a new address; the old value is dropped, never edited in place
    pub fn set_address(&mut self, address: Address) {
        self.entity.props_mut().address = address;
        self.entity.touch();
    }
}

impl Identifiable for Hotel {
    fn id(&self) -> &UniqueEntityId {
        self.entity.id()
    }
}
