use hgsync::domain::entities::SyncPlan;

/// Debug view of a resolved plan: endpoints, rules in evaluation order, command
pub fn render_plan(plan: &SyncPlan, command: &[String]) -> String {
    let mut lines = Vec::new();
    lines.push(format!("hgsync {} (debug, nothing transferred)", plan.direction));
    if let Some(project) = &plan.project {
        lines.push(format!("Project:     {}", project));
    }
    lines.push(format!("Source:      {}", plan.source));
    lines.push(format!("Destination: {}", plan.destination));

    if plan.filters.is_unfiltered() {
        lines.push("Rules:       none (every file)".to_string());
    } else {
        lines.push("Rules:".to_string());
        for rule in plan.filters.rules() {
            lines.push(format!("  {}", rule));
        }
        if plan.filters.prune_empty_dirs() {
            lines.push("Empty directories are pruned".to_string());
        }
    }

    if plan.wants_archive() {
        if let Some(archive) = &plan.options.archive_path {
            lines.push(format!("Archive:     {}", archive.display()));
        }
    }

    lines.push("Command:".to_string());
    lines.push(format!("  {}", shell_join(command)));
    lines.join("\n")
}

/// Join arguments so the line can be pasted into a shell
pub fn shell_join(args: &[String]) -> String {
    args.iter()
        .map(|arg| shell_word(arg))
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell_word(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@,+%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hgsync::domain::entities::TransferOptions;
    use hgsync::domain::services::build_filters;
    use hgsync::domain::value_objects::{Endpoint, SyncDirection, Verbosity};
    use hgsync::RsyncTransfer;

    fn debug_pull() -> SyncPlan {
        SyncPlan {
            project: Some("RunA".to_string()),
            direction: SyncDirection::Pull,
            source: Endpoint::remote("cluster", "/scratch/me/HGS/RunA/"),
            destination: Endpoint::local("/home/me/data/HGS/RunA/"),
            filters: build_filters(SyncDirection::Pull, false, false),
            options: TransferOptions::new()
                .with_verbosity(Verbosity::Debug)
                .with_archive("RunA.zip"),
        }
    }

    #[test]
    fn pull_plan_snapshot() {
        let plan = debug_pull();
        let command = RsyncTransfer::default().command_line(&plan);
        insta::assert_snapshot!(render_plan(&plan, &command), @r"
        hgsync pull (debug, nothing transferred)
        Project:     RunA
        Source:      cluster:/scratch/me/HGS/RunA/
        Destination: /home/me/data/HGS/RunA/
        Rules:
          - */gb/
          - */soil/
          + */
          + *.hydrograph.*.dat
          + parallelindx.dat
          + progress.dat
          + log.*
          + *.grok
          + SCHEDULED
          + IN_PROGRESS
          + COMPLETED
          + batch.pfx
          + *.log
          - *
        Empty directories are pruned
        Archive:     RunA.zip
        Command:
          nice -n 10 rsync --archive --compress --verbose '--exclude=*/gb/' '--exclude=*/soil/' '--include=*/' '--include=*.hydrograph.*.dat' --include=parallelindx.dat --include=progress.dat '--include=log.*' '--include=*.grok' --include=SCHEDULED --include=IN_PROGRESS --include=COMPLETED --include=batch.pfx '--include=*.log' '--exclude=*' --prune-empty-dirs cluster:/scratch/me/HGS/RunA/ /home/me/data/HGS/RunA/
        ");
    }

    #[test]
    fn unfiltered_plan_says_so() {
        let mut plan = debug_pull();
        plan.filters = build_filters(SyncDirection::Pull, true, false);
        plan.options.archive_path = None;
        let rendered = render_plan(&plan, &["rsync".to_string()]);
        assert!(rendered.contains("Rules:       none (every file)"));
        assert!(!rendered.contains("Archive:"));
    }

    #[test]
    fn shell_join_quotes_only_when_needed() {
        let args = vec![
            "rsync".to_string(),
            "--include=*.asc".to_string(),
            "it's".to_string(),
            String::new(),
        ];
        assert_eq!(shell_join(&args), r"rsync '--include=*.asc' 'it'\''s' ''");
    }
}
