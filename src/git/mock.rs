use crate::git::{CommandFailure, CommandRunner};
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock runner for testing without a real repository
///
/// Responses are keyed by the space-joined argument list. Every invocation is
/// recorded, scripted or not.
pub struct MockRunner {
    responses: HashMap<String, Result<String, (i32, String)>>,
    calls: Mutex<Vec<String>>,
}

impl MockRunner {
    /// Create a runner with nothing scripted
    pub fn new() -> Self {
        MockRunner {
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Script a successful invocation with the given stdout
    pub fn respond(&mut self, args: &[&str], stdout: impl Into<String>) -> &mut Self {
        self.responses.insert(args.join(" "), Ok(stdout.into()));
        self
    }

    /// Script a failing invocation with exit code 1 and the given stderr
    pub fn fail(&mut self, args: &[&str], stderr: impl Into<String>) -> &mut Self {
        self.responses.insert(args.join(" "), Err((1, stderr.into())));
        self
    }

    /// All invocations so far, as space-joined argument lists
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Whether `git <args>` was invoked
    pub fn was_called(&self, args: &[&str]) -> bool {
        let key = args.join(" ");
        self.calls().iter().any(|call| *call == key)
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, args: &[&str]) -> Result<String, CommandFailure> {
        let key = args.join(" ");
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(key.clone());
        }

        match self.responses.get(&key) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err((code, stderr))) => Err(CommandFailure::new(args, Some(*code), stderr.clone())),
            None => Err(CommandFailure::new(
                args,
                Some(128),
                format!("mock: no response scripted for `git {}`", key),
            )),
        }
    }
}
