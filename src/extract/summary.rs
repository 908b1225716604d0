use serde::Serialize;

use super::tokens::MarkerLine;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    pub functions: Vec<String>,
    pub callees: Vec<String>,
    pub has_loop: bool,
    pub marker_lines: usize,
}

impl FileSummary {
    pub fn absorb(&mut self, line: &MarkerLine<'_>) {
        self.marker_lines += 1;

        if let Some(function) = line.function {
            self.functions.push(function.to_string());
        }
        self.callees
            .extend(line.callees.iter().map(|callee| callee.to_string()));

        if line.has_loop {
            self.has_loop = true;
        }
    }

    pub fn joined_functions(&self) -> String {
        self.functions.join(",")
    }

    pub fn joined_callees(&self) -> String {
        self.callees.join(",")
    }
}
