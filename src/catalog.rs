//! Static tables: supported target languages and known algorithm categories.

use std::fmt;
use std::str::FromStr;

use crate::pipeline::types::RequestError;

/// Algorithm categories offered by `algoskel list`. Any free-form category
/// is still accepted on the command line.
pub const ALGORITHM_CATEGORIES: &[&str] = &[
    "array",
    "linked list",
    "stack",
    "queue",
    "hash table",
    "string",
    "binary search",
    "sorting",
    "greedy",
    "dynamic programming",
    "depth-first search",
    "breadth-first search",
    "backtracking",
    "tree",
    "graph",
    "math",
    "bit manipulation",
    "union find",
    "prefix sum",
    "sliding window",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Go,
    Python,
    Java,
    Cpp,
    JavaScript,
    TypeScript,
    Rust,
    C,
    CSharp,
    Php,
    Ruby,
    Swift,
    Kotlin,
}

/// How the file header banner is commented out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `/* ... */`
    Block,
    /// `# ...` on every line
    Hash,
}

impl Language {
    pub const ALL: [Language; 13] = [
        Language::Go,
        Language::Python,
        Language::Java,
        Language::Cpp,
        Language::JavaScript,
        Language::TypeScript,
        Language::Rust,
        Language::C,
        Language::CSharp,
        Language::Php,
        Language::Ruby,
        Language::Swift,
        Language::Kotlin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Rust => "rust",
            Language::C => "c",
            Language::CSharp => "csharp",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Python => "py",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
            Language::Rust => "rs",
            Language::C => "c",
            Language::CSharp => "cs",
            Language::Php => "php",
            Language::Ruby => "rb",
            Language::Swift => "swift",
            Language::Kotlin => "kt",
        }
    }

    /// Wording used in prompts to describe how tests are written in this language.
    pub fn test_idiom(&self) -> &'static str {
        match self {
            Language::Go => {
                "Go test functions (func TestXxx(t *testing.T)) in a _test.go file, importing \"testing\""
            }
            Language::Python => "a unittest.TestCase subclass with test_* methods",
            Language::Java => "JUnit 5 test methods annotated with @Test",
            Language::Cpp => "GoogleTest TEST() cases",
            Language::JavaScript => "Jest describe/test blocks with expect assertions",
            Language::TypeScript => "Jest describe/test blocks with typed expect assertions",
            Language::Rust => "a #[cfg(test)] mod tests with #[test] functions",
            Language::C => "assert()-based test functions invoked from a single run_tests() function",
            Language::CSharp => "xUnit [Fact] test methods",
            Language::Php => "a PHPUnit TestCase subclass with test* methods",
            Language::Ruby => "a Minitest::Test subclass with test_* methods",
            Language::Swift => "an XCTestCase subclass with test* methods",
            Language::Kotlin => "kotlin.test @Test functions",
        }
    }

    pub fn comment_style(&self) -> CommentStyle {
        match self {
            Language::Python | Language::Ruby => CommentStyle::Hash,
            _ => CommentStyle::Block,
        }
    }

    /// Suggested command for running the generated tests from the language directory.
    pub fn test_command(&self, file_name: &str) -> String {
        match self {
            Language::Go => format!("go test -v {}", file_name),
            Language::Python => format!("python -m unittest {}", file_name),
            Language::Java => "mvn test".to_string(),
            Language::Cpp => format!(
                "g++ -std=c++17 {} -lgtest -lgtest_main -pthread && ./a.out",
                file_name
            ),
            Language::JavaScript | Language::TypeScript => format!("npx jest {}", file_name),
            Language::Rust => format!(
                "rustc --test {} -o skeleton_test && ./skeleton_test",
                file_name
            ),
            Language::C => format!("cc {} && ./a.out", file_name),
            Language::CSharp => "dotnet test".to_string(),
            Language::Php => format!("phpunit {}", file_name),
            Language::Ruby => format!("ruby {}", file_name),
            Language::Swift => "swift test".to_string(),
            Language::Kotlin => "gradle test".to_string(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "go" | "golang" => Ok(Language::Go),
            "python" | "py" => Ok(Language::Python),
            "java" => Ok(Language::Java),
            "cpp" | "c++" => Ok(Language::Cpp),
            "javascript" | "js" => Ok(Language::JavaScript),
            "typescript" | "ts" => Ok(Language::TypeScript),
            "rust" | "rs" => Ok(Language::Rust),
            "c" => Ok(Language::C),
            "csharp" | "c#" | "cs" => Ok(Language::CSharp),
            "php" => Ok(Language::Php),
            "ruby" | "rb" => Ok(Language::Ruby),
            "swift" => Ok(Language::Swift),
            "kotlin" | "kt" => Ok(Language::Kotlin),
            _ => Err(RequestError::UnsupportedLanguage(s.to_string())),
        }
    }
}
