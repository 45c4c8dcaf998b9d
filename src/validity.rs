// ⏳ Reference Validity - how long a reference can still be paid
//
// "Today" is always an argument. The portal shows the remaining days and
// flags references whose due date has passed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceStatus {
    /// Due date is still ahead ("Vigente")
    Current,
    /// Due date is today or already passed ("Vencido")
    Expired,
}

impl ReferenceStatus {
    /// Label shown on the portal
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceStatus::Current => "Vigente",
            ReferenceStatus::Expired => "Vencido",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validity {
    /// Whole days until the due date, never negative
    pub days_remaining: i64,
    pub status: ReferenceStatus,
}

impl Validity {
    pub fn evaluate(due_date: NaiveDate, today: NaiveDate) -> Self {
        let days = (due_date - today).num_days();

        Validity {
            days_remaining: days.max(0),
            status: if days > 0 {
                ReferenceStatus::Current
            } else {
                ReferenceStatus::Expired
            },
        }
    }

    pub fn is_payable(&self) -> bool {
        self.status == ReferenceStatus::Current
    }
}
