use std::fmt;

use serde::{Deserialize, Serialize};

use crate::store::{Record, Stateful};

/// Where a bus currently is. New buses always start in the park.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum BusStatus {
    #[default]
    InPark,
    OnRoute,
}

impl fmt::Display for BusStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BusStatus::InPark => "in park",
            BusStatus::OnRoute => "on route",
        };
        f.write_str(label)
    }
}

/// A fleet vehicle with an assigned driver and route number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bus {
    pub id: u32,
    pub driver: String,
    pub route: u32,
    #[serde(default)]
    pub status: BusStatus,
}

impl Bus {
    /// Creates a bus parked in the depot. The store assigns the id on `add`.
    pub fn new(driver: impl Into<String>, route: u32) -> Self {
        Self {
            id: 0,
            driver: driver.into(),
            route,
            status: BusStatus::InPark,
        }
    }
}

impl Record for Bus {
    fn id(&self) -> u32 {
        self.id
    }

    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl Stateful for Bus {
    type State = BusStatus;

    fn status(&self) -> BusStatus {
        self.status
    }

    fn set_status(&mut self, status: BusStatus) {
        self.status = status;
    }
}

impl fmt::Display for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bus {}: driver {}, route {}, {}",
            self.id, self.driver, self.route, self.status
        )
    }
}
