use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_uuid_v7, routine::value_objects::RoutineFields};

/// One step of a care routine, e.g. the second morning step of a skin routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Routine {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub step: String,
    pub routine_type: String,
    pub order_index: i32,
    /// Profiles the step is suggested for; empty when it applies to everyone.
    pub recommended_for: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Routine {
    pub fn new(fields: RoutineFields) -> Self {
        let now = Utc::now();

        Self {
            id: generate_uuid_v7(),
            title: fields.title,
            description: fields.description,
            step: fields.step,
            routine_type: fields.routine_type,
            order_index: fields.order_index,
            recommended_for: fields.recommended_for,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, fields: RoutineFields) {
        self.title = fields.title;
        self.description = fields.description;
        self.step = fields.step;
        self.routine_type = fields.routine_type;
        self.order_index = fields.order_index;
        self.recommended_for = fields.recommended_for;
        self.updated_at = Utc::now();
    }
}
