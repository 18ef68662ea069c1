//! The student dashboard migration.
//!
//! Drops the manual "Update Token" button, collapses the id fallbacks to
//! `currentUser.profile.id`, and rewrites `initApp` so `currentUser.profile`
//! is populated from either the `/login` or the `/user` response shape.

use dashpatch_shared::Result;

use crate::step::PatchStep;

pub use dashpatch_shared::DEFAULT_TARGET_PATH as DEFAULT_TARGET;

/// Printed once the run completes, whether or not anything matched.
pub const SUCCESS_MESSAGE: &str = "✅ File fixed successfully!";

/// `<div class="px-6 mb-2">` wrapping the `manualTokenInput()` button.
pub const UPDATE_TOKEN_BUTTON_PATTERN: &str = r#"(?s)<div class="px-6 mb-2">\s*<button[^>]*onclick="manualTokenInput\(\)"[^>]*>.*?</button>\s*</div>"#;

pub const PROFILE_ID_FALLBACK: &str = "currentUser.profile?.id || currentUser.id";
pub const STUDENT_ID_FALLBACK: &str = "currentUser.student?.id || currentUser.id";
pub const PROFILE_ID: &str = "currentUser.profile.id";

/// `initApp` body as shipped: trusts `/user` and patches in `currentUser.student`.
pub const INIT_APP_BEFORE: &str = include_str!("fragments/init_app_before.js");

/// `initApp` body after normalization of the response shape.
pub const INIT_APP_AFTER: &str = include_str!("fragments/init_app_after.js");

/// The ordered step list applied to the dashboard page.
pub fn student_dashboard_patch() -> Result<Vec<PatchStep>> {
    Ok(vec![
        PatchStep::remove_pattern("remove-update-token-button", UPDATE_TOKEN_BUTTON_PATTERN)?,
        PatchStep::replace_literal("profile-id-fallback", PROFILE_ID_FALLBACK, PROFILE_ID),
        PatchStep::replace_literal("student-id-fallback", STUDENT_ID_FALLBACK, PROFILE_ID),
        PatchStep::replace_literal("normalize-init-app", INIT_APP_BEFORE, INIT_APP_AFTER),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_in_fixed_order() {
        let names: Vec<_> = student_dashboard_patch()
            .expect("built-in patch compiles")
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(
            names,
            [
                "remove-update-token-button",
                "profile-id-fallback",
                "student-id-fallback",
                "normalize-init-app",
            ]
        );
    }

    #[test]
    fn button_step_is_a_compiled_removal() {
        let steps = student_dashboard_patch().unwrap();
        match &steps[0] {
            PatchStep::RemovePattern { pattern, .. } => {
                assert_eq!(pattern.as_str(), UPDATE_TOKEN_BUTTON_PATTERN);
            }
            other => panic!("expected a removal step, got {other:?}"),
        }
    }

    #[test]
    fn init_blocks_keep_their_indentation() {
        assert!(INIT_APP_BEFORE.starts_with("                    // 2. Fetch User Profile"));
        assert!(INIT_APP_AFTER.starts_with("                    // 2. Fetch User Profile"));
        assert!(!INIT_APP_BEFORE.ends_with('\n'));
        assert!(!INIT_APP_AFTER.ends_with('\n'));
    }

    #[test]
    fn new_init_block_normalizes_both_response_shapes() {
        assert!(INIT_APP_AFTER.contains("if (userData.user && userData.profile) {"));
        assert!(INIT_APP_AFTER.contains("currentUser.profile = userData.student;"));
        assert!(INIT_APP_AFTER.contains(r#"throw new Error("Student profile not found");"#));
        assert!(!INIT_APP_AFTER.contains("currentUser.student = { id: currentUser.id };"));
        assert!(INIT_APP_BEFORE.contains("currentUser.student = { id: currentUser.id };"));
    }

    #[test]
    fn button_pattern_matches_multiline_block() {
        let html = r#"<nav>
    <div class="px-6 mb-2">
        <button
            class="btn"
            onclick="manualTokenInput()"
        >
            <i class="icon-key"></i>
            Update Token
        </button>
    </div>
    <div class="px-6 mb-2"><button onclick="logout()">Logout</button></div>
</nav>"#;
        let (out, n) = student_dashboard_patch().unwrap()[0].apply(html);
        assert_eq!(n, 1);
        assert!(!out.contains("manualTokenInput()"));
        assert!(out.contains(r#"<button onclick="logout()">Logout</button>"#));
    }

    #[test]
    fn button_pattern_ignores_other_handlers() {
        let html = r#"<div class="px-6 mb-2"><button onclick="logout()">Logout</button></div>"#;
        let (out, n) = student_dashboard_patch().unwrap()[0].apply(html);
        assert_eq!(n, 0);
        assert_eq!(out, html);
    }
}
