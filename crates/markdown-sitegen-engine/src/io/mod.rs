use crate::page::{PageError, PageTemplate, generate_page_html};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
    #[error("Invalid static directory: {0}")]
    InvalidStaticDir(String),
    #[error("Failed to generate page from {path}: {source}")]
    Page { path: PathBuf, source: PageError },
}

/// Read a markdown file and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    read_path(&relative_path.to_path(root))
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    write_path(&relative_path.to_path(root), content)
}

fn read_path(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

fn write_path(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Scan for markdown files in the content directory
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_content_dir(content_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "content directory not found: {}",
            path.display()
        )));
    }

    Ok(())
}

pub fn validate_static_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidStaticDir(format!(
            "static directory not found: {}",
            path.display()
        )));
    }

    fs::read_dir(path).map_err(IoError::Io)?;
    Ok(())
}

/// Replace `dest` with a fresh copy of the `src` tree.
///
/// `dest` is left untouched if `src` is not a readable directory.
pub fn copy_static(src: &Path, dest: &Path) -> Result<(), IoError> {
    validate_static_dir(src)?;

    if dest.exists() {
        log::info!("Removing {}", dest.display());
        fs::remove_dir_all(dest)?;
    }
    fs::create_dir_all(dest)?;
    copy_directory_recursive(src, dest)
}

fn copy_directory_recursive(src: &Path, dest: &Path) -> Result<(), IoError> {
    for entry in fs::read_dir(src)? {
        let from = entry?.path();
        let Some(name) = from.file_name() else {
            continue;
        };
        let to = dest.join(name);

        if from.is_dir() {
            fs::create_dir_all(&to)?;
            copy_directory_recursive(&from, &to)?;
        } else {
            log::info!(" * {} -> {}", from.display(), to.display());
            fs::copy(&from, &to)?;
        }
    }

    Ok(())
}

/// Convert one markdown file into an HTML page at `dest`.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<(), IoError> {
    let template = PageTemplate::new(read_path(template_path)?);
    write_page(from, &template, dest, base_path)
}

/// Mirror `content_dir` into `dest_dir`, turning every `a/b.md` into `a/b.html`.
///
/// Returns the number of pages written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<usize, IoError> {
    let template = PageTemplate::new(read_path(template_path)?);
    let files = scan_markdown_files(content_dir)?;

    for file in &files {
        let output = relative_to(file, content_dir)?.with_extension("html");
        write_page(file, &template, &output.to_path(dest_dir), base_path)?;
    }

    Ok(files.len())
}

fn write_page(
    from: &Path,
    template: &PageTemplate,
    dest: &Path,
    base_path: &str,
) -> Result<(), IoError> {
    log::info!("Generating page from {} to {}", from.display(), dest.display());

    let markdown = read_path(from)?;
    let html = generate_page_html(&markdown, template, base_path).map_err(|source| {
        IoError::Page {
            path: from.to_path_buf(),
            source,
        }
    })?;
    write_path(dest, &html)
}

fn relative_to(file: &Path, root: &Path) -> Result<RelativePathBuf, IoError> {
    file.strip_prefix(root)
        .ok()
        .and_then(|rel| RelativePathBuf::from_path(rel).ok())
        .ok_or_else(|| IoError::NotFound(file.to_path_buf()))
}
