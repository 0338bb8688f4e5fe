//! Example sources written into every generated project
//!
//! The content is fixed text; only the build file depends on the selections.

use crate::selection::TestingFramework;
use crate::templates::resolver::TestSource;

/// Name of the example library (`include/foo`, `src/foo`, `namespace foo`)
pub const LIBRARY_NAME: &str = "foo";

/// Directories created under the project root
pub const SKELETON_DIRS: [&str; 3] = ["build", "include/foo", "src/foo"];

/// Directory holding generated unit tests
pub const TESTS_DIR: &str = "tests/unit-tests";

const MAIN_CPP: &str = r#"#include <iostream>
#include "foo/foo.hpp"

int main() {
    std::cout << "Hello, World!" << std::endl;
    std::cout << "40 + 2 = " << foo::bar(40, 2) << std::endl;
    return 0;
}
"#;

const LIBRARY_CPP: &str = r#"#include "foo/foo.hpp"

namespace foo {
    int bar(int a, int b) {
        return a + b;
    }
}
"#;

const LIBRARY_HPP: &str = r#"#pragma once

namespace foo {
    int bar(int a, int b);
}
"#;

const GOOGLE_TEST_CPP: &str = r#"#include "gtest/gtest.h"
#include "foo/foo.hpp"

// Test case for the bar function
TEST(SumTest, HandlesPositiveInput) {
    EXPECT_EQ(42, foo::bar(40, 2));
}

TEST(SumTest, HandlesNegativeInput) {
    EXPECT_EQ(-1, foo::bar(-3, 2));
}

TEST(SumTest, HandlesZeroInput) {
    EXPECT_EQ(0, foo::bar(0, 0));
}
"#;

const CATCH2_CPP: &str = r#"#include <catch2/catch_test_macros.hpp>
#include "foo/foo.hpp"

// Test case for the bar function
TEST_CASE("SumTest HandlesPositiveInput", "[SumTest]") {
    REQUIRE(foo::bar(40, 2) == 42);
}

TEST_CASE("SumTest HandlesNegativeInput", "[SumTest]") {
    REQUIRE(foo::bar(-3, 2) == -1);
}

TEST_CASE("SumTest HandlesZeroInput", "[SumTest]") {
    REQUIRE(foo::bar(0, 0) == 0);
}
"#;

/// `(relative path, content)` for the sources every project gets
pub const EXAMPLE_FILES: [(&str, &str); 3] = [
    ("src/main.cpp", MAIN_CPP),
    ("src/foo/foo.cpp", LIBRARY_CPP),
    ("include/foo/foo.hpp", LIBRARY_HPP),
];

/// Unit test source for a framework
pub fn test_source(framework: TestingFramework) -> Option<TestSource> {
    let content = match framework {
        TestingFramework::GoogleTest => GOOGLE_TEST_CPP,
        TestingFramework::Catch2 => CATCH2_CPP,
        TestingFramework::None => return None,
    };
    Some(TestSource {
        relative_path: format!("{}/{}-tests.cpp", TESTS_DIR, LIBRARY_NAME),
        content,
    })
}
