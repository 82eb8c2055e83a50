//! Line-oriented diff with ndiff-style markers.
//!
//! Unchanged lines carry a `"  "` marker in the raw edit script and are
//! dropped from the public result; removed and added lines keep their
//! `"- "` / `"+ "` markers, and in-place replacements additionally emit
//! `"? "` guide lines marking the changed character positions.

/// Minimum character-level similarity for a delete/insert pair to be
/// reported as an in-place replacement rather than plain remove + add.
const REPLACE_CUTOFF: f64 = 0.75;

/// Diff `old` against `new` line by line, keeping only changed lines.
///
/// The result preserves edit-script document order: removals and additions
/// interleave where they occur rather than being grouped by type. Empty
/// input counts as zero lines, so diffing against an empty text yields an
/// all-added or all-removed result.
pub fn diff_lines(old: &str, new: &str) -> Vec<String> {
    edit_script(old, new)
        .into_iter()
        .filter(|line| !line.starts_with("  "))
        .collect()
}

/// Full edit script including unchanged context lines.
fn edit_script(old: &str, new: &str) -> Vec<String> {
    let a = split_lines(old);
    let b = split_lines(new);
    let matches = lcs_matches(&a, &b);

    let mut out = Vec::new();
    let mut ai = 0;
    let mut bi = 0;
    for &(ma, mb) in &matches {
        emit_block(&a[ai..ma], &b[bi..mb], &mut out);
        out.push(format!("  {}", a[ma]));
        ai = ma + 1;
        bi = mb + 1;
    }
    emit_block(&a[ai..], &b[bi..], &mut out);
    out
}

fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').collect()
    }
}

/// Emit one diverging block between two context anchors.
///
/// The most similar delete/insert pair becomes an in-place replacement and
/// splits the block recursively, mirroring how ndiff resolves replace
/// ranges. Blocks with no pair above the cutoff degrade to plain deletes
/// followed by plain inserts.
fn emit_block(deleted: &[&str], inserted: &[&str], out: &mut Vec<String>) {
    if deleted.is_empty() {
        out.extend(inserted.iter().map(|line| format!("+ {line}")));
        return;
    }
    if inserted.is_empty() {
        out.extend(deleted.iter().map(|line| format!("- {line}")));
        return;
    }

    let mut best: Option<(usize, usize)> = None;
    let mut best_ratio = 0.0;
    for (i, a) in deleted.iter().enumerate() {
        for (j, b) in inserted.iter().enumerate() {
            let ratio = similarity(a, b);
            if ratio >= REPLACE_CUTOFF && ratio > best_ratio {
                best_ratio = ratio;
                best = Some((i, j));
            }
        }
    }

    match best {
        None => {
            out.extend(deleted.iter().map(|line| format!("- {line}")));
            out.extend(inserted.iter().map(|line| format!("+ {line}")));
        }
        Some((i, j)) => {
            emit_block(&deleted[..i], &inserted[..j], out);
            emit_replacement(deleted[i], inserted[j], out);
            emit_block(&deleted[i + 1..], &inserted[j + 1..], out);
        }
    }
}

/// Emit a removed/added pair with intra-line guide lines.
///
/// Guides align under the line content and mark replaced characters with
/// `^`, pure deletions with `-` and pure insertions with `+`. A guide that
/// would be all blanks is omitted.
fn emit_replacement(old_line: &str, new_line: &str, out: &mut Vec<String>) {
    let (old_marks, new_marks) = char_marks(old_line, new_line);
    out.push(format!("- {old_line}"));
    if let Some(guide) = guide_line(&old_marks) {
        out.push(guide);
    }
    out.push(format!("+ {new_line}"));
    if let Some(guide) = guide_line(&new_marks) {
        out.push(guide);
    }
}

fn char_marks(old_line: &str, new_line: &str) -> (Vec<char>, Vec<char>) {
    let a: Vec<char> = old_line.chars().collect();
    let b: Vec<char> = new_line.chars().collect();
    let mut old_marks = vec![' '; a.len()];
    let mut new_marks = vec![' '; b.len()];

    // The sentinel pair closes the block after the last matched character.
    let mut match_list = lcs_matches(&a, &b);
    match_list.push((a.len(), b.len()));

    let mut ai = 0;
    let mut bi = 0;
    for (ma, mb) in match_list {
        let replaced = ai < ma && bi < mb;
        for mark in &mut old_marks[ai..ma] {
            *mark = if replaced { '^' } else { '-' };
        }
        for mark in &mut new_marks[bi..mb] {
            *mark = if replaced { '^' } else { '+' };
        }
        ai = ma + 1;
        bi = mb + 1;
    }

    (old_marks, new_marks)
}

fn guide_line(marks: &[char]) -> Option<String> {
    let guide: String = marks.iter().collect();
    let guide = guide.trim_end();
    if guide.is_empty() {
        None
    } else {
        Some(format!("? {guide}"))
    }
}

/// Character-level similarity ratio in `[0, 1]`: `2·LCS / (len_a + len_b)`.
fn similarity(a: &str, b: &str) -> f64 {
    let ca: Vec<char> = a.chars().collect();
    let cb: Vec<char> = b.chars().collect();
    if ca.is_empty() && cb.is_empty() {
        return 1.0;
    }
    let lcs = lcs_matches(&ca, &cb).len();
    2.0 * lcs as f64 / (ca.len() + cb.len()) as f64
}

/// Index pairs of a longest common subsequence of `a` and `b`, in order.
///
/// Common prefix and suffix are matched directly so the quadratic table only
/// covers the diverging middle. Ties prefer consuming `a` first, which keeps
/// removals ahead of additions at equal table value.
fn lcs_matches<T: PartialEq>(a: &[T], b: &[T]) -> Vec<(usize, usize)> {
    let mut prefix = 0;
    while prefix < a.len() && prefix < b.len() && a[prefix] == b[prefix] {
        prefix += 1;
    }
    let mut suffix = 0;
    while suffix < a.len() - prefix
        && suffix < b.len() - prefix
        && a[a.len() - 1 - suffix] == b[b.len() - 1 - suffix]
    {
        suffix += 1;
    }

    let mid_a = &a[prefix..a.len() - suffix];
    let mid_b = &b[prefix..b.len() - suffix];
    let n = mid_a.len();
    let m = mid_b.len();

    let width = m + 1;
    let mut table = vec![0u32; (n + 1) * width];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            table[i * width + j] = if mid_a[i] == mid_b[j] {
                table[(i + 1) * width + j + 1] + 1
            } else {
                table[(i + 1) * width + j].max(table[i * width + j + 1])
            };
        }
    }

    let mut matches: Vec<(usize, usize)> = (0..prefix).map(|k| (k, k)).collect();
    let mut i = 0;
    let mut j = 0;
    while i < n && j < m {
        if mid_a[i] == mid_b[j] {
            matches.push((prefix + i, prefix + j));
            i += 1;
            j += 1;
        } else if table[(i + 1) * width + j] >= table[i * width + j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }
    for k in 0..suffix {
        matches.push((a.len() - suffix + k, b.len() - suffix + k));
    }
    matches
}
