// ABOUTME: Test support utilities.
// ABOUTME: Provides a scripted fake command runner and tracing setup.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::path::Path;
use std::sync::{Arc, Once};

use waypost::git::{CommandOutput, CommandRunner, Invocation};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("waypost=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

type Effect = Box<dyn Fn(&Invocation) + Send + Sync>;

struct Rule {
    needle: String,
    output: CommandOutput,
    effect: Option<Effect>,
}

/// A scripted [`CommandRunner`] that records every invocation.
///
/// Rules match on a substring of the rendered command line; the first match
/// wins and unmatched commands succeed with empty output. Clones share state.
#[derive(Clone)]
pub struct FakeRunner {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    rules: Mutex<Vec<Rule>>,
    invocations: Mutex<Vec<Invocation>>,
}

#[allow(dead_code)]
impl FakeRunner {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner::default()),
        }
    }

    fn push_rule(&self, needle: &str, output: CommandOutput, effect: Option<Effect>) {
        self.inner.rules.lock().push(Rule {
            needle: needle.to_string(),
            output,
            effect,
        });
    }

    /// Script a successful response with the given stdout.
    pub fn on_success(&self, needle: &str, stdout: &str) {
        self.push_rule(
            needle,
            CommandOutput {
                exit_code: Some(0),
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
            None,
        );
    }

    /// Script a failing response with the given stderr.
    pub fn on_failure(&self, needle: &str, stderr: &str) {
        self.push_rule(
            needle,
            CommandOutput {
                exit_code: Some(1),
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
            None,
        );
    }

    /// Script a successful response that also runs a side effect, e.g.
    /// creating the directory a real `git worktree add` would create.
    pub fn on_success_with<F>(&self, needle: &str, stdout: &str, effect: F)
    where
        F: Fn(&Invocation) + Send + Sync + 'static,
    {
        self.push_rule(
            needle,
            CommandOutput {
                exit_code: Some(0),
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
            Some(Box::new(effect)),
        );
    }

    /// All recorded invocations, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.inner.invocations.lock().clone()
    }

    /// Recorded invocations rendered as shell-like lines.
    pub fn lines(&self) -> Vec<String> {
        self.invocations()
            .iter()
            .map(Invocation::display_line)
            .collect()
    }

    fn respond(&self, invocation: Invocation) -> CommandOutput {
        let line = invocation.display_line();
        let rules = self.inner.rules.lock();
        let response = match rules.iter().find(|r| line.contains(&r.needle)) {
            Some(rule) => {
                if let Some(effect) = &rule.effect {
                    effect(&invocation);
                }
                rule.output.clone()
            }
            None => CommandOutput {
                exit_code: Some(0),
                stdout: String::new(),
                stderr: String::new(),
            },
        };
        drop(rules);

        self.inner.invocations.lock().push(invocation);
        response
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> std::io::Result<CommandOutput> {
        Ok(self.respond(Invocation::new(program, args, cwd)))
    }

    async fn run_inherited(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> std::io::Result<CommandOutput> {
        Ok(self.respond(Invocation::new(program, args, cwd)))
    }
}
