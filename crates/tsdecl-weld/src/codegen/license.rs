//! License banners and optional file inclusion

use crate::error::{WeldError, WeldResult};
use std::fs;
use std::path::Path;

/// Read `file` relative to `base_dir` if it exists
///
/// The returned text always ends with a blank line so it can be spliced
/// into generated output. An absent or empty file yields an empty string.
pub fn include_file_if_present(base_dir: &Path, file: &str) -> WeldResult<String> {
    let path = base_dir.join(file);
    if !path.exists() {
        return Ok(String::new());
    }

    let content = fs::read_to_string(&path).map_err(|e| WeldError::io(&path, e))?;
    if content.is_empty() {
        return Ok(content);
    }

    if content.ends_with('\n') {
        Ok(content + "\n")
    } else {
        Ok(content + "\n\n")
    }
}

/// Generate the Apache-2.0 license banner for a generated file
pub fn generate_license(year: i32) -> String {
    let mut output = String::new();
    output.push_str("/*\n");
    output.push_str(&format!(" * Copyright {} ES4X\n", year));
    output.push_str(" *\n");
    output.push_str(" * ES4X licenses this file to you under the Apache License, version 2.0\n");
    output.push_str(" * (the \"License\"); you may not use this file except in compliance with the\n");
    output.push_str(" * License.  You may obtain a copy of the License at:\n");
    output.push_str(" *\n");
    output.push_str(" * http://www.apache.org/licenses/LICENSE-2.0\n");
    output.push_str(" *\n");
    output.push_str(" * Unless required by applicable law or agreed to in writing, software\n");
    output.push_str(" * distributed under the License is distributed on an \"AS IS\" BASIS, WITHOUT\n");
    output.push_str(" * WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the\n");
    output.push_str(" * License for the specific language governing permissions and limitations\n");
    output.push_str(" * under the License.\n");
    output.push_str(" */\n\n");
    output
}
