//! Plan command report data structures.

use protoplan_planner::{Action, BuildPlan};

use super::output::{Output, Report};

/// Text rendering of a build plan.
#[derive(Debug)]
pub struct PlanReport<'a> {
    pub label: String,
    pub plan: &'a BuildPlan,
}

impl<'a> PlanReport<'a> {
    pub fn new(label: String, plan: &'a BuildPlan) -> Self {
        Self { label, plan }
    }
}

impl Report for PlanReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        out.title(&self.label);
        out.newline();

        out.section("outputs");
        for output in &self.plan.outputs {
            out.list_item(output.short_path.as_str());
        }
        out.newline();

        if !self.plan.intermediates.is_empty() {
            out.section("intermediates");
            for output in &self.plan.intermediates {
                let suffix = if output.directory { "/" } else { "" };
                out.list_item(&format!("{}{}", output.short_path, suffix));
            }
            out.newline();
        }

        out.section("actions");
        for (index, action) in self.plan.actions.iter().enumerate() {
            out.numbered_item(index + 1, &describe(action));
            match action {
                Action::RunGenerator(run) => {
                    out.key_value_indented("executable", run.executable.as_str());
                    for arg in &run.args {
                        out.key_value_indented("arg", arg);
                    }
                }
                Action::CopyGenerated(copy) => {
                    out.key_value_indented("script", copy.script.as_str());
                    out.key_value_indented("from", copy.scratch_dir.as_str());
                }
                Action::CreateDirectory(_) | Action::WriteFile(_) => {}
            }
        }

        for diag in &self.plan.diagnostics {
            out.preformatted(&diag.to_string());
        }
    }
}

fn describe(action: &Action) -> String {
    match action {
        Action::CreateDirectory(create) => {
            format!("{} {}", action.mnemonic(), create.directory)
        }
        Action::WriteFile(write) => format!("{} {}", action.mnemonic(), write.path),
        Action::RunGenerator(run) => format!("{} {}", action.mnemonic(), run.progress_message),
        Action::CopyGenerated(copy) => format!("{} {}", action.mnemonic(), copy.progress_message),
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;
    use protoplan_planner::{
        DeclaredOutput,
        graph::{RunGenerator, WriteFile},
        pipeline::Diagnostic,
        reconcile::CopyGenerated,
    };

    use super::*;
    use crate::reports::output::tests::BufferOutput;

    fn declared(short_path: &str, directory: bool) -> DeclaredOutput {
        DeclaredOutput {
            short_path: short_path.into(),
            path: Utf8PathBuf::from("out").join(short_path),
            directory,
        }
    }

    #[test]
    fn test_plan_report_render() {
        let mut plan = BuildPlan::default();
        plan.outputs.insert(declared("api.protoc_gen_swift/a/x.pb.swift", false));
        plan.intermediates.insert(declared("api.modulemap", false));
        plan.intermediates.insert(declared("api.protoc_gen_swift.tmp", true));
        plan.actions.push(Action::WriteFile(WriteFile {
            path: "out/api.modulemap".into(),
            content: String::new(),
        }));
        plan.actions.push(Action::RunGenerator(RunGenerator {
            executable: "bin/protoc".into(),
            args: vec![
                "--swift_out=out/api.protoc_gen_swift.tmp".into(),
                "a/x.proto".into(),
            ],
            inputs: vec![],
            outputs: vec![],
            mnemonic: "ProtocGenerate".into(),
            progress_message: "Generating swift sources for //svc:api".into(),
        }));
        plan.actions.push(Action::CopyGenerated(CopyGenerated {
            script: "out/api.protoc_gen_swift.copy.sh".into(),
            scratch_dir: "out/api.protoc_gen_swift.tmp".into(),
            permanent_dir: "out/api.protoc_gen_swift".into(),
            outputs: vec!["out/api.protoc_gen_swift/a/x.pb.swift".into()],
            progress_message: "Copying generated files into out/api.protoc_gen_swift".into(),
        }));
        plan.diagnostics.push(
            Diagnostic::info("collect", "1 bundled source skipped").at("google/protobuf/any.proto"),
        );

        let mut out = BufferOutput::default();
        PlanReport::new("//svc:api".into(), &plan).render(&mut out);

        insta::assert_snapshot!(out.text(), @r"
        //svc:api

        outputs:
          - api.protoc_gen_swift/a/x.pb.swift

        intermediates:
          - api.modulemap
          - api.protoc_gen_swift.tmp/

        actions:
          1. FileWrite out/api.modulemap
          2. ProtocGenerate Generating swift sources for //svc:api
          executable: bin/protoc
          arg: --swift_out=out/api.protoc_gen_swift.tmp
          arg: a/x.proto
          3. ProtocCopyGenerated Copying generated files into out/api.protoc_gen_swift
          script: out/api.protoc_gen_swift.copy.sh
          from: out/api.protoc_gen_swift.tmp
        info: 1 bundled source skipped (at google/protobuf/any.proto)
        ");
    }

    #[test]
    fn test_plan_report_omits_empty_intermediates() {
        let mut plan = BuildPlan::default();
        plan.outputs
            .insert(declared("api.protoc_gen_swift/api_empty.pb.swift", false));

        let mut out = BufferOutput::default();
        PlanReport::new("//svc:api".into(), &plan).render(&mut out);

        assert!(!out.lines.iter().any(|line| line == "intermediates:"));
        assert_eq!(out.lines[2], "outputs:");
        assert_eq!(out.lines.last().map(String::as_str), Some("actions:"));
    }
}
