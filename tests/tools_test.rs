mod common;

use assert2::{check, let_assert};
use common::{TempProject, calculator_project};
use doxygen_mcp::ServerState;
use doxygen_mcp::doxyfile::Language;
use doxygen_mcp::tools::{
    CreateProjectRequest, GenerateDocsRequest, ListSymbolsRequest, QuerySymbolRequest,
    ScanProjectRequest, SetProjectRequest, handle_check_install, handle_create_project,
    handle_generate_docs, handle_list_symbols, handle_query_symbol, handle_scan_project,
    handle_set_project,
};

fn path_arg(project: &TempProject) -> Option<String> {
    Some(project.path().display().to_string())
}

async fn configure(state: &ServerState, project: &TempProject) {
    handle_set_project(
        state,
        SetProjectRequest {
            path: project.path().display().to_string(),
        },
    )
    .await
    .expect("set_project should succeed on an existing directory");
}

// --- create_project ---

#[tokio::test]
async fn create_project_writes_padded_doxyfile() {
    let state = ServerState::new();
    let project = TempProject::new();

    let response = handle_create_project(
        &state,
        CreateProjectRequest {
            project_name: "Test Project".to_string(),
            path: path_arg(&project),
            language: None,
            recursive: None,
            extract_private: None,
        },
    )
    .await
    .unwrap();
    check!(response.contains("Doxygen project 'Test Project' created."));

    let doxyfile = std::fs::read_to_string(project.path().join("Doxyfile")).unwrap();
    check!(doxyfile.contains("PROJECT_NAME           = \"Test Project\""));
    check!(doxyfile.contains("FILE_PATTERNS          = *.cpp *.hpp *.cc *.hh *.cxx *.hxx"));
    check!(doxyfile.contains("RECURSIVE              = YES"));
    check!(doxyfile.contains("EXTRACT_PRIVATE        = NO"));
    check!(doxyfile.contains("GENERATE_XML           = YES"));
}

#[tokio::test]
async fn create_project_applies_language_preset_and_overrides() {
    let state = ServerState::new();
    let project = TempProject::new();
    project.create_file("pkg/lib.py", "pass\n");
    project.create_file("pkg/cli.py", "pass\n");
    project.create_file("notes.txt", "not documentable\n");

    let response = handle_create_project(
        &state,
        CreateProjectRequest {
            project_name: "PyLib".to_string(),
            path: path_arg(&project),
            language: Some(Language::Python),
            recursive: Some(false),
            extract_private: Some(true),
        },
    )
    .await
    .unwrap();
    check!(response.contains("Language preset: python (*.py)"));
    check!(response.contains("Matching source files: 2"));

    let doxyfile = std::fs::read_to_string(project.path().join("Doxyfile")).unwrap();
    check!(doxyfile.contains("FILE_PATTERNS          = *.py"));
    check!(doxyfile.contains("OPTIMIZE_OUTPUT_JAVA   = YES"));
    check!(doxyfile.contains("RECURSIVE              = NO"));
    check!(doxyfile.contains("EXTRACT_PRIVATE        = YES"));
}

#[tokio::test]
async fn create_project_creates_missing_directories() {
    let state = ServerState::new();
    let project = TempProject::new();
    let nested = project.path().join("deeply/nested/lib");

    handle_create_project(
        &state,
        CreateProjectRequest {
            project_name: "Nested".to_string(),
            path: Some(nested.display().to_string()),
            language: None,
            recursive: None,
            extract_private: None,
        },
    )
    .await
    .unwrap();

    check!(nested.join("Doxyfile").exists());
}

#[tokio::test]
async fn create_project_rejects_quoted_names() {
    let state = ServerState::new();
    let project = TempProject::new();

    let_assert!(
        Err(message) = handle_create_project(
            &state,
            CreateProjectRequest {
                project_name: "bad \" name".to_string(),
                path: path_arg(&project),
                language: None,
                recursive: None,
                extract_private: None,
            },
        )
        .await
    );
    check!(message.contains("Invalid project name"));
    check!(!project.path().join("Doxyfile").exists());
}

#[tokio::test]
async fn create_project_without_path_or_project_fails() {
    let state = ServerState::new();

    let_assert!(
        Err(message) = handle_create_project(
            &state,
            CreateProjectRequest {
                project_name: "Orphan".to_string(),
                path: None,
                language: None,
                recursive: None,
                extract_private: None,
            },
        )
        .await
    );
    check!(message.contains("set_project"));
}

#[tokio::test]
async fn create_project_defaults_to_configured_project() {
    let state = ServerState::new();
    let project = TempProject::new();
    configure(&state, &project).await;

    handle_create_project(
        &state,
        CreateProjectRequest {
            project_name: "Configured".to_string(),
            path: None,
            language: None,
            recursive: None,
            extract_private: None,
        },
    )
    .await
    .unwrap();

    check!(project.path().join("Doxyfile").exists());
}

// --- set_project ---

#[tokio::test]
async fn set_project_loads_existing_documentation() {
    let state = ServerState::new();
    let project = calculator_project();

    let response = handle_set_project(
        &state,
        SetProjectRequest {
            path: project.path().display().to_string(),
        },
    )
    .await
    .unwrap();

    check!(response.contains("Loaded documentation index: 2 compounds."));
    check!(state.engine().await.is_some());
}

#[tokio::test]
async fn set_project_without_doxyfile_suggests_create_project() {
    let state = ServerState::new();
    let project = TempProject::new();

    let response = handle_set_project(
        &state,
        SetProjectRequest {
            path: project.path().display().to_string(),
        },
    )
    .await
    .unwrap();

    check!(response.contains("No Doxyfile yet. Use create_project"));
    check!(response.contains("No generated documentation found."));
}

#[tokio::test]
async fn set_project_rejects_missing_path() {
    let state = ServerState::new();

    let_assert!(
        Err(message) = handle_set_project(
            &state,
            SetProjectRequest {
                path: "/nonexistent/definitely/not/here".to_string(),
            },
        )
        .await
    );
    check!(message.contains("Failed to resolve path"));
    check!(state.project_dir().await.is_none());
}

// --- query_symbol ---

#[tokio::test]
async fn query_symbol_formats_compound_details() {
    let state = ServerState::new();
    let project = calculator_project();
    configure(&state, &project).await;

    let response = handle_query_symbol(
        &state,
        QuerySymbolRequest {
            name: "Calculator".to_string(),
        },
    )
    .await
    .unwrap();

    check!(response.contains("class Calculator"));
    check!(response.contains("A basic calculator class with arithmetic operations."));
    check!(response.contains("Members (1):"));
    check!(response.contains("  [function] int add(int, int)"));
    check!(response.contains("      Adds two numbers."));
}

#[tokio::test]
async fn query_symbol_suggests_known_names_when_not_found() {
    let state = ServerState::new();
    let project = calculator_project();
    configure(&state, &project).await;

    let response = handle_query_symbol(
        &state,
        QuerySymbolRequest {
            name: "Nope".to_string(),
        },
    )
    .await
    .unwrap();

    check!(response.contains("No symbol matching 'Nope' found."));
    check!(response.contains("  - Calculator"));
    check!(response.contains("  - MathUtils"));
}

#[tokio::test]
async fn query_symbol_on_empty_index_points_at_generate_docs() {
    let state = ServerState::new();
    let project = TempProject::new();
    configure(&state, &project).await;

    let response = handle_query_symbol(
        &state,
        QuerySymbolRequest {
            name: "Anything".to_string(),
        },
    )
    .await
    .unwrap();

    check!(response.contains("the documentation index is empty"));
    check!(response.contains("generate_docs"));
}

#[tokio::test]
async fn query_symbol_without_project_fails() {
    let state = ServerState::new();

    let_assert!(
        Err(message) = handle_query_symbol(
            &state,
            QuerySymbolRequest {
                name: "Calculator".to_string(),
            },
        )
        .await
    );
    check!(message.contains("No project configured"));
    check!(message.contains("set_project"));
}

#[tokio::test]
async fn query_symbol_surfaces_fetch_errors() {
    let state = ServerState::new();
    let project = TempProject::new();
    // Indexed but without a detail file: a lookup must error, not report
    // "not found".
    project.write_index(&[("Ghost", "class", "classGhost")]);
    configure(&state, &project).await;

    let_assert!(
        Err(message) = handle_query_symbol(
            &state,
            QuerySymbolRequest {
                name: "Ghost".to_string(),
            },
        )
        .await
    );
    check!(message.contains("classGhost.xml"));
    check!(message.contains("not found"));
}

// --- list_symbols ---

#[tokio::test]
async fn list_symbols_reports_names_in_index_order() {
    let state = ServerState::new();
    let project = calculator_project();
    configure(&state, &project).await;

    let response = handle_list_symbols(&state, ListSymbolsRequest { kind: None })
        .await
        .unwrap();

    check!(response.contains("Documented symbols (2):"));
    let calculator = response.find("- Calculator").unwrap();
    let math_utils = response.find("- MathUtils").unwrap();
    check!(calculator < math_utils);
}

#[tokio::test]
async fn list_symbols_filters_by_kind() {
    let state = ServerState::new();
    let project = calculator_project();
    configure(&state, &project).await;

    let response = handle_list_symbols(
        &state,
        ListSymbolsRequest {
            kind: Some("namespace".to_string()),
        },
    )
    .await
    .unwrap();

    check!(response.contains("Documented namespace symbols (1):"));
    check!(response.contains("- MathUtils"));
    check!(!response.contains("- Calculator"));
}

#[tokio::test]
async fn list_symbols_with_unknown_kind_reports_kind() {
    let state = ServerState::new();
    let project = calculator_project();
    configure(&state, &project).await;

    let response = handle_list_symbols(
        &state,
        ListSymbolsRequest {
            kind: Some("union".to_string()),
        },
    )
    .await
    .unwrap();

    check!(response.contains("No documented symbols of kind 'union' found."));
}

// --- generate_docs ---

#[tokio::test]
async fn generate_docs_without_doxyfile_fails() {
    let state = ServerState::new();
    let project = TempProject::new();

    let_assert!(
        Err(message) = handle_generate_docs(
            &state,
            GenerateDocsRequest {
                path: path_arg(&project),
            },
        )
        .await
    );
    check!(message.contains("No Doxyfile found"));
    check!(message.contains("create_project"));
}

// --- scan_project ---

#[tokio::test]
async fn scan_project_counts_files_by_extension() {
    let state = ServerState::new();
    let project = TempProject::new();
    project.create_file("src/main.cpp", "int main() {}\n");
    project.create_file("src/header.h", "#pragma once\n");
    project.create_file("utils.py", "pass\n");
    project.create_file("config.json", "{}\n");
    project.create_file("README.md", "# readme\n");

    let response = handle_scan_project(
        &state,
        ScanProjectRequest {
            path: path_arg(&project),
        },
    )
    .await
    .unwrap();

    check!(response.contains("Total files: 5"));
    check!(response.contains("  .cpp: 1 files"));
    check!(response.contains("  .py: 1 files"));
    check!(response.contains("  .md: 1 files"));
}

#[tokio::test]
async fn scan_project_rejects_missing_path() {
    let state = ServerState::new();

    let_assert!(
        Err(message) = handle_scan_project(
            &state,
            ScanProjectRequest {
                path: Some("/nonexistent/definitely/not/here".to_string()),
            },
        )
        .await
    );
    check!(message.contains("Failed to resolve path"));
}

// --- check_install ---

#[tokio::test]
async fn check_install_reports_missing_doxygen() {
    // Only this test invokes the doxygen binary by version probe; a bogus
    // override cannot race the other tests in this binary.
    unsafe { std::env::set_var("DOXYGEN_PATH", "/nonexistent/doxygen-binary") };

    let_assert!(Err(message) = handle_check_install().await);
    check!(message.contains("Doxygen is not available"));
    check!(message.contains("/nonexistent/doxygen-binary"));

    unsafe { std::env::remove_var("DOXYGEN_PATH") };
}
