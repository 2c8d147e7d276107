//! Project files the installer edits

use std::path::{Path, PathBuf};

use crate::domain::entities::PatchTarget;

/// Searched in order; the first one present is patched
pub const USER_MODEL_CANDIDATES: [&str; 2] = ["app/User.php", "app/Models/User.php"];

pub const ROUTES_FILE: &str = "routes/web.php";

pub const PACKAGE_CONFIG_FILE: &str = "config/voyager.php";

pub const ROUTES_MARKER: &str = "Voyager::routes()";

const USER_MODEL_FIND: &str = "extends Authenticatable";
const USER_MODEL_REPLACE: &str = r"extends \TCG\Voyager\Models\User";

/// Emitted when no user model is found; the install carries on
pub const USER_MODEL_MISSING_WARNINGS: [&str; 2] = [
    "Unable to locate \"User.php\" in app or app/Models.  Did you move this file?",
    "You will need to update this manually.  Change \"extends Authenticatable\" to \"extends \\TCG\\Voyager\\Models\\User\" in your User model",
];

/// First user model candidate that exists
pub fn find_user_model(project_root: &Path, exists: impl Fn(&Path) -> bool) -> Option<PathBuf> {
    USER_MODEL_CANDIDATES
        .iter()
        .map(|rel| project_root.join(rel))
        .find(|path| exists(path))
}

pub fn user_model_target(path: impl Into<PathBuf>) -> PatchTarget {
    PatchTarget::replace(path, USER_MODEL_FIND, USER_MODEL_REPLACE)
}

/// Route group appended to the routes file
pub fn route_block(route_prefix: &str) -> String {
    format!(
        "\n\nRoute::group(['prefix' => '{route_prefix}'], function () {{\n    {ROUTES_MARKER};\n}});\n"
    )
}

pub fn routes_target(project_root: &Path, route_prefix: &str) -> PatchTarget {
    PatchTarget::append_unless_present(
        project_root.join(ROUTES_FILE),
        ROUTES_MARKER,
        route_block(route_prefix),
    )
}
