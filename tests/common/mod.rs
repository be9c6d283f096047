//! Shared helpers for the service tests: a client wired to a fake backend
//! plus canned row fixtures in the backend's JSON shape.
#![allow(dead_code)]

use serde_json::{json, Value};
use uuid::Uuid;
use wiremock::{MockServer, ResponseTemplate};

use fittrack_data::SupabaseClient;

pub const TEST_KEY: &str = "test-anon-key";

/// Create a client that points at the mock server
pub fn test_client(mock_server: &MockServer) -> SupabaseClient {
    SupabaseClient::new(&mock_server.uri(), TEST_KEY).expect("failed to build test client")
}

/// The backend's response when a single-object fetch matched no rows.
pub fn no_rows_response() -> ResponseTemplate {
    ResponseTemplate::new(406).set_body_json(json!({
        "message": "JSON object requested, multiple (or no) rows returned",
        "code": "PGRST116",
        "details": "The result contains 0 rows",
        "hint": null
    }))
}

pub fn backend_error_response(status: u16, message: &str, code: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "message": message,
        "code": code,
        "details": null,
        "hint": null
    }))
}

pub fn user_row(id: Uuid) -> Value {
    json!({
        "id": id,
        "username": "lifter",
        "email": "lifter@example.com",
        "preferences": {
            "units": "metric",
            "workout_reminder_time": "07:30",
            "theme": "dark"
        },
        "created_at": "2024-01-01T08:00:00Z",
        "updated_at": "2024-01-01T08:00:00Z"
    })
}

pub fn workout_row(id: Uuid, user_id: Uuid, date: &str) -> Value {
    json!({
        "id": id,
        "user_id": user_id,
        "template_id": null,
        "name": "Push Day",
        "date": date,
        "duration": 60,
        "calories_burned": 450,
        "notes": null,
        "status": "completed",
        "created_at": "2024-01-01T08:00:00Z",
        "updated_at": "2024-01-01T09:00:00Z"
    })
}

pub fn workout_exercise_row(id: Uuid, workout_id: Uuid, order: i32) -> Value {
    json!({
        "id": id,
        "workout_id": workout_id,
        "exercise_id": Uuid::new_v4(),
        "sets": [
            {
                "set_number": 1,
                "reps": 8,
                "weight": 80.0,
                "duration": null,
                "rir": 2,
                "set_type": "normal",
                "completed": true,
                "rest_time": 120
            }
        ],
        "order": order,
        "is_superset": false,
        "superset_group_id": null,
        "notes": null,
        "created_at": "2024-01-01T08:00:00Z",
        "updated_at": "2024-01-01T08:00:00Z"
    })
}

pub fn exercise_row(id: Uuid, name: &str) -> Value {
    json!({
        "id": id,
        "user_id": null,
        "name": name,
        "category": "strength",
        "muscle_groups": ["chest", "triceps"],
        "description": "Barbell pressed from the chest while lying on a bench.",
        "difficulty_level": "intermediate",
        "equipment_required": ["barbell", "bench"],
        "is_system": true,
        "created_at": "2024-01-01T08:00:00Z",
        "updated_at": "2024-01-01T08:00:00Z"
    })
}

pub fn progress_row(id: Uuid, user_id: Uuid, date: &str) -> Value {
    json!({
        "id": id,
        "user_id": user_id,
        "date": date,
        "metrics": {
            "weight": 82.5,
            "body_fat": 18.0,
            "measurements": {
                "chest": 104.0,
                "waist": 86.0
            }
        },
        "photos": null,
        "notes": "Felt strong this week.",
        "created_at": "2024-01-01T08:00:00Z",
        "updated_at": "2024-01-01T08:00:00Z"
    })
}

pub fn goal_row(id: Uuid, user_id: Uuid, target_date: &str, status: &str) -> Value {
    json!({
        "id": id,
        "user_id": user_id,
        "title": "Bench 100 kg",
        "description": null,
        "target_date": target_date,
        "status": status,
        "metric_type": "weight",
        "target_value": 100.0,
        "current_value": 90.0,
        "reminder_frequency": "weekly",
        "last_reminder_sent": null,
        "created_at": "2024-01-01T08:00:00Z",
        "updated_at": "2024-01-01T08:00:00Z"
    })
}
