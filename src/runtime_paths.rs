use std::{env, path::PathBuf};

use crate::ROOT_DIR_ENV;

const DEFAULT_ROOT_DIR_NAME: &str = ".nukebatchrender";

pub fn default_root_dir() -> Option<PathBuf> {
    root_dir_from(env::var(ROOT_DIR_ENV).ok(), home::home_dir())
}

fn root_dir_from(override_dir: Option<String>, home_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(root) = override_dir {
        let path = PathBuf::from(root.trim());
        if !path.as_os_str().is_empty() {
            return Some(path);
        }
    }

    home_dir.map(|home| home.join(DEFAULT_ROOT_DIR_NAME))
}
