use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_dashboard_paths() {
    assert_eq!(Role::Doctor.dashboard_path(), "/doctor/dashboard");
    assert_eq!(Role::Patient.dashboard_path(), "/patient/dashboard");
}

#[test]
fn role_serializes_screaming_case() {
    assert_eq!(serde_json::to_string(&Role::Doctor).unwrap(), "\"DOCTOR\"");
    assert_eq!(serde_json::to_string(&Role::Patient).unwrap(), "\"PATIENT\"");
}

#[test]
fn role_deserializes_screaming_case() {
    let role: Role = serde_json::from_str("\"DOCTOR\"").unwrap();
    assert_eq!(role, Role::Doctor);
}

// =============================================================
// AppointmentStatus
// =============================================================

#[test]
fn status_wire_values() {
    assert_eq!(AppointmentStatus::Pending.as_str(), "PENDING");
    assert_eq!(AppointmentStatus::Completed.as_str(), "COMPLETED");
    assert_eq!(AppointmentStatus::Cancelled.as_str(), "CANCELLED");
}

#[test]
fn only_pending_is_actionable() {
    assert!(AppointmentStatus::Pending.is_actionable());
    assert!(!AppointmentStatus::Completed.is_actionable());
    assert!(!AppointmentStatus::Cancelled.is_actionable());
}

// =============================================================
// Wire field names
// =============================================================

#[test]
fn appointment_uses_camel_case_ids() {
    let json = r#"{
        "id": "a1",
        "doctorId": "d1",
        "patientId": "p1",
        "date": "2026-09-15",
        "status": "PENDING"
    }"#;
    let appt: Appointment = serde_json::from_str(json).unwrap();
    assert_eq!(appt.doctor_id, "d1");
    assert_eq!(appt.patient_id, "p1");
    assert_eq!(appt.status, AppointmentStatus::Pending);
    assert!(appt.doctor.is_none());
    assert!(appt.patient.is_none());
}

#[test]
fn appointment_embeds_doctor_summary_when_present() {
    let json = r#"{
        "id": "a1",
        "doctorId": "d1",
        "patientId": "p1",
        "date": "2026-09-15",
        "status": "COMPLETED",
        "doctor": {
            "id": "d1",
            "name": "Helen Cho",
            "email": "cho@example.com",
            "specialization": "Cardiology"
        }
    }"#;
    let appt: Appointment = serde_json::from_str(json).unwrap();
    let doctor = appt.doctor.unwrap();
    assert_eq!(doctor.name, "Helen Cho");
    assert!(doctor.photo_url.is_none());
}

#[test]
fn create_appointment_serializes_doctor_id_camel_case() {
    let req = CreateAppointmentRequest {
        doctor_id: "d1".to_owned(),
        date: "2026-09-15".to_owned(),
    };
    let json = serde_json::to_string(&req).unwrap();
    assert!(json.contains("\"doctorId\":\"d1\""));
    assert!(!json.contains("doctor_id"));
}

#[test]
fn update_status_serializes_snake_case_id() {
    let req = UpdateStatusRequest {
        appointment_id: "a1".to_owned(),
        status: AppointmentStatus::Cancelled,
    };
    let json = serde_json::to_string(&req).unwrap();
    assert!(json.contains("\"appointment_id\":\"a1\""));
    assert!(json.contains("\"status\":\"CANCELLED\""));
}

#[test]
fn register_request_omits_empty_photo_url() {
    let req = RegisterPatientRequest {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        password: "secret1".to_owned(),
        photo_url: None,
    };
    let json = serde_json::to_string(&req).unwrap();
    assert!(!json.contains("photo_url"));
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn pagination_first_page_has_no_prev() {
    let p = Pagination { page: 1, limit: 9, total: 20, total_pages: 3 };
    assert!(!p.has_prev());
    assert!(p.has_next());
}

#[test]
fn pagination_last_page_has_no_next() {
    let p = Pagination { page: 3, limit: 9, total: 20, total_pages: 3 };
    assert!(p.has_prev());
    assert!(!p.has_next());
}

#[test]
fn pagination_single_page_cannot_advance() {
    let p = Pagination { page: 1, limit: 9, total: 4, total_pages: 1 };
    assert!(!p.has_prev());
    assert!(!p.has_next());
}

#[test]
fn paginated_envelope_decodes() {
    let json = r#"{
        "data": [
            { "id": "d1", "name": "Helen Cho", "email": "cho@example.com", "specialization": "Cardiology" }
        ],
        "pagination": { "page": 1, "limit": 9, "total": 1, "totalPages": 1 }
    }"#;
    let page: Paginated<Doctor> = serde_json::from_str(json).unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.pagination.total_pages, 1);
}

#[test]
fn api_envelope_decodes_auth_payload() {
    let json = r#"{
        "success": true,
        "data": {
            "user": { "id": "u1", "name": "Ana", "email": "ana@example.com", "role": "PATIENT" },
            "token": "jwt-token"
        },
        "message": "Login successful"
    }"#;
    let env: ApiEnvelope<AuthPayload> = serde_json::from_str(json).unwrap();
    assert!(env.success);
    assert_eq!(env.data.user.role, Role::Patient);
    assert_eq!(env.data.token, "jwt-token");
    assert_eq!(env.message.as_deref(), Some("Login successful"));
}
