use shared::domain::{Activity, ActivityCatalog};
use thiserror::Error;

/// Rule violations for signup and removal. The display strings are the exact
/// `detail` texts the HTTP layer sends back, so clients can show them as-is.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Activity not found")]
    UnknownActivity,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student not signed up for this activity")]
    NotSignedUp,
}

/// Canonical form used for storage and duplicate checks. "  KID@School.EDU "
/// and "kid@school.edu" are the same student.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn looks_like_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// Registers a student for an activity. The activity must exist before the
/// email is inspected, so an unknown name wins over a malformed address.
pub fn sign_up(
    catalog: &mut ActivityCatalog,
    name: &str,
    email: &str,
) -> Result<String, CatalogError> {
    let activity = catalog.get_mut(name).ok_or(CatalogError::UnknownActivity)?;
    let email = normalize_email(email);
    if !looks_like_email(&email) {
        return Err(CatalogError::InvalidEmail);
    }
    if activity.participants.iter().any(|p| p == &email) {
        return Err(CatalogError::AlreadySignedUp);
    }
    activity.participants.push(email.clone());
    Ok(format!("Signed up {email} for {name}"))
}

/// Withdraws a student from an activity they are signed up for.
pub fn remove_participant(
    catalog: &mut ActivityCatalog,
    name: &str,
    email: &str,
) -> Result<String, CatalogError> {
    let activity = catalog.get_mut(name).ok_or(CatalogError::UnknownActivity)?;
    let email = normalize_email(email);
    let index = activity
        .participants
        .iter()
        .position(|p| p == &email)
        .ok_or(CatalogError::NotSignedUp)?;
    activity.participants.remove(index);
    Ok(format!("Removed {email} from {name}"))
}

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// The school's activity listing. Order here is the order clients display.
pub fn seed_catalog() -> ActivityCatalog {
    ActivityCatalog::from([
        (
            "Chess Club".to_string(),
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_string(),
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_string(),
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Club de Ajedrez".to_string(),
            activity(
                "Aprende estrategias y compite en torneos de ajedrez",
                "Viernes, 3:30 PM - 5:00 PM",
                12,
                &["carlos@mergington.edu", "lucia@mergington.edu"],
            ),
        ),
        (
            "Clase de Programación".to_string(),
            activity(
                "Aprende fundamentos de programación y desarrolla proyectos",
                "Martes y Jueves, 3:30 PM - 4:30 PM",
                20,
                &["ana@mergington.edu", "isabel@mergington.edu"],
            ),
        ),
        (
            "Educación Física".to_string(),
            activity(
                "Actividades deportivas y educación física",
                "Lunes, Miércoles y Viernes, 2:00 PM - 3:00 PM",
                30,
                &["diego@mergington.edu", "paula@mergington.edu"],
            ),
        ),
        (
            "Club de Robótica".to_string(),
            activity(
                "Diseña y construye robots innovadores",
                "Miércoles, 4:00 PM - 5:30 PM",
                15,
                &["jorge@mergington.edu"],
            ),
        ),
        (
            "Taller de Artes".to_string(),
            activity(
                "Expresión artística a través de pintura y escultura",
                "Jueves, 3:30 PM - 5:00 PM",
                18,
                &["maria@mergington.edu", "alejandra@mergington.edu"],
            ),
        ),
        (
            "Club de Debate".to_string(),
            activity(
                "Desarrolla habilidades de oratoria y argumentación",
                "Martes, 4:00 PM - 5:30 PM",
                20,
                &["pedro@mergington.edu"],
            ),
        ),
    ])
}
