//! Static files compiled into the binary, keyed by output filename.

pub const LICENSE: &str = r#"MIT License

Copyright (c) <year> <copyright holders>

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#;

pub const FLAKE8: &str = r#"[flake8]
max-line-length = 88
max-complexity = 10
extend-ignore = E203, W503
exclude =
    .git,
    __pycache__,
    .venv,
    venv,
    build,
    dist,
    *.egg-info
"#;

pub const PYPROJECT_TOML: &str = r#"[tool.black]
line-length = 88
target-version = ["py38"]
include = '\.pyi?$'
extend-exclude = '''
/(
    \.git
  | \.venv
  | build
  | dist
)/
'''
"#;

pub const DOCKERFILE: &str = r#"FROM python:3.8-slim

ENV PYTHONDONTWRITEBYTECODE=1 \
    PYTHONUNBUFFERED=1 \
    PIP_NO_CACHE_DIR=1

WORKDIR /app

COPY requirements.txt .
RUN pip install --upgrade pip && pip install -r requirements.txt

COPY . .

CMD ["python", "main.py"]
"#;

pub const DOCKERIGNORE: &str = r#".git
.gitignore
.dockerignore
Dockerfile
.idea
.vscode
__pycache__
*.py[cod]
*.egg-info
.venv
venv
.env
.pytest_cache
.mypy_cache
build
dist
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    License,
    Flake8,
    Pyproject,
    Dockerfile,
    Dockerignore,
}

impl Template {
    /// Every template, in the order they are written.
    pub const ALL: [Self; 5] =
        [Self::License, Self::Flake8, Self::Pyproject, Self::Dockerfile, Self::Dockerignore];

    pub fn filename(self) -> &'static str {
        match self {
            Self::License => "License",
            Self::Flake8 => ".flake8",
            Self::Pyproject => "pyproject.toml",
            Self::Dockerfile => "Dockerfile",
            Self::Dockerignore => ".dockerignore",
        }
    }

    pub fn contents(self) -> &'static str {
        match self {
            Self::License => LICENSE,
            Self::Flake8 => FLAKE8,
            Self::Pyproject => PYPROJECT_TOML,
            Self::Dockerfile => DOCKERFILE,
            Self::Dockerignore => DOCKERIGNORE,
        }
    }
}
