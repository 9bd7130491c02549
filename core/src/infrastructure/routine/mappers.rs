use chrono::Utc;

use crate::domain::routine::entities::Routine;
use crate::entity::routines::Model as RoutineModel;

/// Rows created before positions and profiles existed read as position 0
/// with no profile.
impl From<RoutineModel> for Routine {
    fn from(model: RoutineModel) -> Self {
        Routine {
            id: model.id,
            title: model.title,
            description: model.description,
            step: model.step,
            routine_type: model.routine_type,
            order_index: model.order_index.unwrap_or(0),
            recommended_for: model.recommended_for.unwrap_or_default(),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
