//! Integration tests for registering a finished plan with a host.

use std::str::FromStr;

use protoplan_manifest::Manifest;
use protoplan_planner::{
    ActionGraphBuilder, BuildUnit, PluginSpec,
    graph::{COPY_MNEMONIC, GENERATE_MNEMONIC},
    host::{CREATE_DIRECTORY_COMMAND, register},
    reconcile::script::COPY_SCRIPT_TEMPLATE,
    testing::{MemoryFileSystem, RecordedCall, RecordingRunner},
};

const MANIFEST: &str = r#"
    [target]
    name = "api_proto"
    package = "services/api"

    [generator]
    protoc = "bin/protoc"
    descriptor_sets = ["services/api/api_proto.descriptor.bin"]

    [plugins.swift]
    binary = "bin/protoc-gen-swift"
    suffixes = [".pb.swift"]
    allowed_options = ["Visibility", "FileNaming"]
    bundled_proto_paths = ["google/protobuf/any.proto"]

    [plugins.swift.default_options]
    Visibility = "Internal"

    [options]
    Visibility = "Public"

    [[sources]]
    import_path = "api/v1/service.proto"
    file = "services/api/proto/api/v1/service.proto"

    [[sources]]
    import_path = "api/v1/models.proto"
    file = "services/api/proto/api/v1/models.proto"

    [[module_mappings]]
    module_name = "CommonProto"
    proto_paths = ["common/types.proto"]
"#;

fn plan_manifest(content: &str) -> protoplan_planner::BuildPlan {
    let manifest = Manifest::from_str(content).expect("Failed to parse manifest");
    let builder = ActionGraphBuilder::new(BuildUnit::from_manifest(&manifest));
    builder
        .build_all(
            &PluginSpec::from_manifest(&manifest),
            &manifest.options,
            &manifest.descriptors(),
        )
        .expect("Failed to build plan")
}

#[test]
fn test_register_declares_every_output_once() {
    let plan = plan_manifest(MANIFEST);
    let mut fs = MemoryFileSystem::new("bazel-out/bin/services/api");
    let mut runner = RecordingRunner::new();

    let registered = register(&plan, &mut fs, &mut runner).expect("registration should succeed");

    // Mapping file, copy script and two generated sources
    assert_eq!(registered.files.len(), 4);
    assert_eq!(registered.directories.len(), 1);
    assert!(fs.directories.contains(&camino::Utf8PathBuf::from(
        "bazel-out/bin/services/api/api_proto.protoc_gen_swift.tmp"
    )));
    assert!(fs.files.contains(&camino::Utf8PathBuf::from(
        "bazel-out/bin/services/api/api_proto.protoc_gen_swift/api/v1/service.pb.swift"
    )));
}

#[test]
fn test_register_dispatches_actions_in_order() {
    let plan = plan_manifest(MANIFEST);
    let mut fs = MemoryFileSystem::default();
    let mut runner = RecordingRunner::new();

    register(&plan, &mut fs, &mut runner).unwrap();

    assert_eq!(runner.names(), vec!["write", "run", "expand_template", "run"]);

    match &runner.calls[0] {
        RecordedCall::Write { path, content } => {
            assert_eq!(path, "services/api/api_proto.protoc_gen_module_mappings.asciipb");
            insta::assert_snapshot!(content, @r#"
            mapping {
              module_name: "CommonProto"
              proto_file_path: "common/types.proto"
            }
            "#);
        }
        other => panic!("expected mapping write, got {other:?}"),
    }

    match &runner.calls[1] {
        RecordedCall::Run {
            executable,
            args,
            mnemonic,
            ..
        } => {
            assert_eq!(executable, "bin/protoc");
            assert_eq!(mnemonic, GENERATE_MNEMONIC);
            assert!(args.contains(&"--swift_opt=Visibility=Public".to_string()));
            assert!(args.contains(
                &"--descriptor_set_in=services/api/api_proto.descriptor.bin".to_string()
            ));
        }
        other => panic!("expected generator run, got {other:?}"),
    }

    match &runner.calls[2] {
        RecordedCall::ExpandTemplate {
            template,
            substitutions,
            output,
            is_executable,
        } => {
            assert_eq!(template, COPY_SCRIPT_TEMPLATE);
            assert_eq!(output, "services/api/api_proto.protoc_gen_swift_copy.sh");
            assert!(*is_executable);
            assert_eq!(
                substitutions["{temporary_output_directory_path}"],
                "services/api/api_proto.protoc_gen_swift.tmp"
            );
        }
        other => panic!("expected template expansion, got {other:?}"),
    }

    match &runner.calls[3] {
        RecordedCall::Run {
            executable,
            inputs,
            outputs,
            mnemonic,
            ..
        } => {
            assert_eq!(executable, "services/api/api_proto.protoc_gen_swift_copy.sh");
            assert_eq!(mnemonic, COPY_MNEMONIC);
            assert_eq!(inputs.len(), 1);
            assert_eq!(outputs.len(), 2);
        }
        other => panic!("expected copy run, got {other:?}"),
    }
}

#[test]
fn test_register_empty_plugin_runs_only_directory_creation() {
    let content = r#"
        [target]
        name = "wkt"
        package = "third_party/protobuf"

        [plugins.swift]
        binary = "bin/protoc-gen-swift"
        suffixes = [".pb.swift"]
        bundled_proto_paths = ["google/protobuf/any.proto"]

        [[sources]]
        import_path = "google/protobuf/any.proto"
        file = "third_party/protobuf/any.proto"
    "#;
    let plan = plan_manifest(content);
    let mut fs = MemoryFileSystem::default();
    let mut runner = RecordingRunner::new();

    let registered = register(&plan, &mut fs, &mut runner).unwrap();

    assert_eq!(registered.files.len(), 1);
    assert_eq!(runner.calls.len(), 1);
    match &runner.calls[0] {
        RecordedCall::RunShell {
            command,
            args,
            outputs,
        } => {
            assert_eq!(command, CREATE_DIRECTORY_COMMAND);
            assert_eq!(
                args,
                &vec![
                    "third_party/protobuf/wkt.protoc_gen_swift".to_string(),
                    "third_party/protobuf/wkt.protoc_gen_swift/wkt_empty.pb.swift".to_string(),
                ]
            );
            assert_eq!(outputs.len(), 1);
        }
        other => panic!("expected shell command, got {other:?}"),
    }
}

#[test]
fn test_two_plugins_register_without_duplicate_declarations() {
    let content = format!(
        "{}\n{}",
        MANIFEST,
        r#"
    [plugins.grpc_swift]
    binary = "bin/protoc-gen-grpc-swift"
    suffixes = [".grpc.swift"]
    allowed_options = ["Visibility"]
"#
    );
    let plan = plan_manifest(&content);
    let mut fs = MemoryFileSystem::default();
    let mut runner = RecordingRunner::new();

    register(&plan, &mut fs, &mut runner).expect("no path may be declared twice");

    assert_eq!(
        runner.names(),
        vec!["write", "run", "expand_template", "run", "run", "expand_template", "run"]
    );
}
