//! End-to-end tests: declaration -> classification -> shapes -> Kotlin text.

use navgen_core::render::kotlin::{relative_path, render_unit, KotlinOptions};
use navgen_core::{
    classify, generate, ClassificationError, Declaration, DeclaredParameter, KnownTypes, TypeRef,
    UnitNaming,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn param(name: &str, ty: &str) -> DeclaredParameter {
    DeclaredParameter::new(name, TypeRef::parse(ty))
}

fn render(declaration: Declaration) -> String {
    let spec = classify(&declaration, &KnownTypes::kotlin()).expect("classification failed");
    let unit = generate(&spec, &UnitNaming::default());
    render_unit(&unit, &KotlinOptions::default())
}

#[test]
fn test_plain() {
    let source = render(Declaration::new("test", "Test", "test"));

    assert_eq!(
        source,
        r#"package test

import androidx.navigation.NavController
import androidx.navigation.NavGraphBuilder
import androidx.navigation.compose.composable
import com.star_zero.compose_nav_gen.NavGenRoutes
import kotlin.String
import kotlin.Unit

public fun NavGraphBuilder.test(): Unit {
  composable("test") {
    Test()
  }
}

public fun NavController.test(): Unit {
  navigate("test")
}

public val NavGenRoutes.test: String
  get() = "test"
"#
    );
}

#[test]
fn test_string_argument() {
    let source = render(Declaration::new("test", "Test", "test").param(param("data", "String")));

    assert!(source.contains(
        r#"public fun NavGraphBuilder.test(): Unit {
  composable("test/{data}",
    arguments = listOf(
      navArgument("data") { type = NavType.StringType },
    )
  ) { backStackEntry ->
    Test(
      backStackEntry.arguments!!.getString("data")!!,
    )
  }
}

public fun NavController.test(`data`: String): Unit {
  navigate("""test/$data""")
}

public val NavGenRoutes.test: String
  get() = "test/{data}"
"#
    ));
    assert!(source.contains("import androidx.navigation.NavType\n"));
    assert!(source.contains("import androidx.navigation.navArgument\n"));
}

#[test]
fn test_int_argument() {
    let source = render(Declaration::new("test", "Test", "test").param(param("data", "Int")));

    assert!(source.contains(r#"navArgument("data") { type = NavType.IntType },"#));
    assert!(source.contains(r#"backStackEntry.arguments!!.getInt("data"),"#));
    assert!(source.contains("public fun NavController.test(`data`: Int): Unit {"));
    assert!(source.contains("import kotlin.Int\n"));
}

#[test]
fn test_nav_controller_only() {
    let source = render(
        Declaration::new("test", "Test", "test").param(param("navController", "NavController")),
    );

    assert!(source.contains(
        r#"public fun NavGraphBuilder.test(navController: NavController): Unit {
  composable("test") {
    Test(
      navController,
    )
  }
}

public fun NavController.test(): Unit {
  navigate("test")
}
"#
    ));
    assert!(!source.contains("navArgument"));
}

#[test]
fn test_complex_arguments() {
    let source = render(
        Declaration::new("test", "Test", "test")
            .param(param("data1", "Int"))
            .param(param("data2", "String"))
            .param(param("navController", "NavController")),
    );

    assert!(source.contains(
        r#"public fun NavGraphBuilder.test(navController: NavController): Unit {
  composable("test/{data1}/{data2}",
    arguments = listOf(
      navArgument("data1") { type = NavType.IntType },
      navArgument("data2") { type = NavType.StringType },
    )
  ) { backStackEntry ->
    Test(
      backStackEntry.arguments!!.getInt("data1"),
      backStackEntry.arguments!!.getString("data2")!!,
      navController,
    )
  }
}

public fun NavController.test(data1: Int, data2: String): Unit {
  navigate("""test/$data1/$data2""")
}

public val NavGenRoutes.test: String
  get() = "test/{data1}/{data2}"
"#
    ));
}

#[test]
fn test_detail_screen() {
    let source = render(
        Declaration::new("sample.ui.detail", "DetailScreen", "detail")
            .param(param("lang", "String"))
            .param(param("ja", "String?"))
            .param(param("like", "Boolean"))
            .param(param("defaultTest", "String").with_default("yes"))
            .param(param("navController", "NavController")),
    );

    assert!(source.contains(
        r#"public fun NavGraphBuilder.detail(navController: NavController): Unit {
  composable("detail/{lang}/{like}?ja={ja}&defaultTest={defaultTest}",
    arguments = listOf(
      navArgument("lang") { type = NavType.StringType },
      navArgument("ja") { type = NavType.StringType; nullable = true },
      navArgument("like") { type = NavType.BoolType },
      navArgument("defaultTest") { type = NavType.StringType; defaultValue = "yes" },
    )
  ) { backStackEntry ->
    DetailScreen(
      backStackEntry.arguments!!.getString("lang")!!,
      backStackEntry.arguments?.getString("ja"),
      backStackEntry.arguments!!.getBoolean("like"),
      backStackEntry.arguments!!.getString("defaultTest")!!,
      navController,
    )
  }
}
"#
    ));
    assert!(source.contains(
        r#"public fun NavController.detail(lang: String, ja: String? = null, like: Boolean, defaultTest: String = "yes"): Unit {
  navigate("""detail/$lang/$like?ja=${ja ?: ""}&defaultTest=$defaultTest""")
}"#
    ));
    assert!(source.contains(
        r#"get() = "detail/{lang}/{like}?ja={ja}&defaultTest={defaultTest}""#
    ));
}

#[test]
fn test_numeric_defaults_unquoted() {
    let source = render(
        Declaration::new("test", "Test", "test")
            .param(param("page", "Int").with_default(2))
            .param(param("compact", "Boolean").with_default(true)),
    );

    assert!(source.contains(r#"navArgument("page") { type = NavType.IntType; defaultValue = 2 },"#));
    assert!(source.contains(r#"navArgument("compact") { type = NavType.BoolType; defaultValue = true },"#));
    assert!(source.contains("(page: Int = 2, compact: Boolean = true): Unit {"));
    assert!(source.contains(r#"navigate("""test?page=$page&compact=$compact""")"#));
}

#[test]
fn test_nullable_with_default_prefers_literal() {
    let source = render(
        Declaration::new("test", "Test", "test").param(param("q", "String?").with_default("all")),
    );

    assert!(source.contains(
        r#"navArgument("q") { type = NavType.StringType; nullable = true; defaultValue = "all" },"#
    ));
    assert!(source.contains(r#"(q: String? = "all"): Unit {"#));
    assert!(source.contains(r#"navigate("""test?q=${q ?: ""}""")"#));
}

#[test]
fn test_default_literal_escaped() {
    let source = render(
        Declaration::new("test", "Test", "test")
            .param(param("greeting", "String").with_default("say \"$hi\"")),
    );

    assert!(source.contains(r#"defaultValue = "say \"${'$'}hi\"""#));
}

#[test]
fn test_screen_in_other_package_is_imported() {
    let declaration = Declaration::new("app.ui", "HomeScreen", "home");
    let spec = classify(&declaration, &KnownTypes::kotlin()).unwrap();
    let mut unit = generate(&spec, &UnitNaming::default());
    unit.package = "app.generated".into();

    let source = render_unit(&unit, &KotlinOptions::default());
    assert!(source.starts_with("package app.generated\n"));
    assert!(source.contains("import app.ui.HomeScreen\n"));
}

#[test]
fn test_relative_path() {
    let spec = classify(
        &Declaration::new("com.example.ui", "ListScreen", "list"),
        &KnownTypes::kotlin(),
    )
    .unwrap();
    let unit = generate(&spec, &UnitNaming::default());

    assert_eq!(
        relative_path(&unit),
        PathBuf::from("com").join("example").join("ui").join("NavGenList.kt")
    );
}

#[test]
fn test_rendering_is_idempotent() {
    let declaration = Declaration::new("test", "Test", "test")
        .param(param("a", "Int"))
        .param(param("b", "String?"));

    assert_eq!(render(declaration.clone()), render(declaration));
}

#[test]
fn test_unsupported_type_aborts_declaration() {
    let declaration = Declaration::new("test", "Test", "test").param(param("data", "Exception"));
    let err = classify(&declaration, &KnownTypes::kotlin()).unwrap_err();

    assert!(matches!(err, ClassificationError::UnsupportedType { .. }));
    assert!(err.to_string().contains("Not supported argument type"));
}
