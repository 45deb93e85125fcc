//! Rendering-environment plan derivation and apply step.

use std::env;

use crate::spec::{EnumOsFamily, SpecEnvOptions, SpecEnvPlan};

/// Fontconfig search-path variable read by the plot renderer's font stack.
const NAME_ENV_FONTCONFIG_PATH: &str = "FONTCONFIG_PATH";
/// System font configuration directory on Linux.
const DIR_FONTCONFIG_LINUX: &str = "/etc/fonts";
/// Cache-home variable consulted for the per-user font cache.
const NAME_ENV_CACHE_HOME: &str = "XDG_CACHE_HOME";
/// Temp-dir subdirectory used when no cache override is given.
const NAME_DIR_CACHE_DEFAULT: &str = "sheetkit";

/// Derive the environment plan for one OS family.
///
/// Pure; calling it any number of times yields the same plan. On Linux the
/// plan pins `FONTCONFIG_PATH` so font discovery works in containers without
/// a configured fontconfig. With `if_reinit_cache_home` set, unix families
/// additionally re-point `XDG_CACHE_HOME` for the font cache. Windows and
/// unrecognized families need nothing.
pub fn derive_env_plan(os_family: EnumOsFamily, options: &SpecEnvOptions) -> SpecEnvPlan {
    let mut vars = Vec::new();

    if os_family == EnumOsFamily::Linux {
        vars.push((
            NAME_ENV_FONTCONFIG_PATH.to_string(),
            DIR_FONTCONFIG_LINUX.to_string(),
        ));
    }

    let if_unix = matches!(
        os_family,
        EnumOsFamily::Linux | EnumOsFamily::MacOs | EnumOsFamily::Other
    );
    if if_unix && options.if_reinit_cache_home {
        let dir_cache = options
            .dir_cache
            .clone()
            .unwrap_or_else(|| env::temp_dir().join(NAME_DIR_CACHE_DEFAULT));
        vars.push((
            NAME_ENV_CACHE_HOME.to_string(),
            dir_cache.to_string_lossy().to_string(),
        ));
    }

    SpecEnvPlan { vars }
}

/// Apply a derived plan to the process environment.
///
/// Variables that already hold a value are left untouched, so repeat
/// application is a no-op and caller-provided settings always win.
///
/// # Safety
///
/// Mutates the process environment via [`env::set_var`]; the caller must
/// guarantee no other thread reads or writes the environment concurrently.
pub unsafe fn apply_env_plan(plan: &SpecEnvPlan) {
    for (name, value) in &plan.vars {
        if env::var_os(name).is_none() {
            unsafe { env::set_var(name, value) };
        }
    }
}
