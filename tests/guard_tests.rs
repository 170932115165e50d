use prep_portal::guard::{Decision, RedirectTarget, decide};
use prep_portal::models::{Role, Session};
use prep_portal::session::RestorePhase;
use uuid::Uuid;

/// Minimal session fixture; individual tests override the fields they exercise.
fn session(role: Role) -> Session {
    Session {
        id: Uuid::new_v4(),
        email: format!("{}@example.com", role.as_str()),
        name: "Test User".to_string(),
        role,
        referral_code: None,
        is_paid: None,
        referred_by: None,
        phone: None,
        qualification: None,
        expertise: None,
        is_verified: None,
    }
}

#[test]
fn pending_restore_always_renders_loading() {
    // Ordering: the loading check precedes everything, even a session that
    // would otherwise be denied outright.
    assert_eq!(
        decide(RestorePhase::Pending, None, Role::Student),
        Decision::Loading
    );

    let s = session(Role::Agent);
    assert_eq!(
        decide(RestorePhase::Pending, Some(&s), Role::Student),
        Decision::Loading
    );
}

#[test]
fn anonymous_visitor_redirects_to_login() {
    assert_eq!(
        decide(RestorePhase::Complete, None, Role::Student),
        Decision::Redirect(RedirectTarget::Login)
    );
    assert_eq!(
        decide(RestorePhase::Complete, None, Role::Admin),
        Decision::Redirect(RedirectTarget::Login)
    );
}

#[test]
fn wrong_role_redirects_home() {
    let agent = session(Role::Agent);
    assert_eq!(
        decide(RestorePhase::Complete, Some(&agent), Role::Student),
        Decision::Redirect(RedirectTarget::Home)
    );
}

#[test]
fn unpaid_student_redirects_to_payment() {
    let mut student = session(Role::Student);
    student.is_paid = Some(false);
    assert_eq!(
        decide(RestorePhase::Complete, Some(&student), Role::Student),
        Decision::Redirect(RedirectTarget::Payment)
    );

    // An absent flag counts as unpaid.
    student.is_paid = None;
    assert_eq!(
        decide(RestorePhase::Complete, Some(&student), Role::Student),
        Decision::Redirect(RedirectTarget::Payment)
    );
}

#[test]
fn paid_student_renders() {
    let mut student = session(Role::Student);
    student.is_paid = Some(true);
    assert_eq!(
        decide(RestorePhase::Complete, Some(&student), Role::Student),
        Decision::Render
    );
}

#[test]
fn unverified_teacher_redirects_to_verification() {
    let mut teacher = session(Role::Teacher);
    teacher.is_verified = Some(false);
    assert_eq!(
        decide(RestorePhase::Complete, Some(&teacher), Role::Teacher),
        Decision::Redirect(RedirectTarget::TeacherVerification)
    );
}

#[test]
fn verified_teacher_renders() {
    let mut teacher = session(Role::Teacher);
    teacher.is_verified = Some(true);
    assert_eq!(
        decide(RestorePhase::Complete, Some(&teacher), Role::Teacher),
        Decision::Render
    );
}

#[test]
fn agent_and_admin_have_no_gating_flag() {
    // Role match alone authorizes; the payment/verification flags are never
    // consulted for these variants.
    let agent = session(Role::Agent);
    assert_eq!(
        decide(RestorePhase::Complete, Some(&agent), Role::Agent),
        Decision::Render
    );

    let admin = session(Role::Admin);
    assert_eq!(
        decide(RestorePhase::Complete, Some(&admin), Role::Admin),
        Decision::Render
    );
}

#[test]
fn role_check_precedes_gating_check() {
    // An unpaid student navigating to a teacher page is a wrong-role denial
    // (home), not a payment redirect.
    let mut student = session(Role::Student);
    student.is_paid = Some(false);
    assert_eq!(
        decide(RestorePhase::Complete, Some(&student), Role::Teacher),
        Decision::Redirect(RedirectTarget::Home)
    );
}

#[test]
fn decision_is_deterministic() {
    // Same (phase, session, role) triple, same outcome, every time.
    let mut student = session(Role::Student);
    student.is_paid = Some(false);

    let first = decide(RestorePhase::Complete, Some(&student), Role::Student);
    for _ in 0..10 {
        assert_eq!(
            decide(RestorePhase::Complete, Some(&student), Role::Student),
            first
        );
    }
}

#[test]
fn redirect_targets_map_to_navigation_paths() {
    assert_eq!(RedirectTarget::Login.path(), "/login");
    assert_eq!(RedirectTarget::Home.path(), "/");
    assert_eq!(RedirectTarget::Payment.path(), "/payment");
    assert_eq!(
        RedirectTarget::TeacherVerification.path(),
        "/teacher-verification"
    );
}
