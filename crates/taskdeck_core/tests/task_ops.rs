use taskdeck_core::{
    create_task, filter_tasks, sort_tasks, toggle_completion, validate_task, Task, TaskFilter,
    TaskValidationError,
};

fn sample_tasks() -> Vec<Task> {
    (0..6u64)
        .map(|seq| {
            let task = create_task(&format!("task {seq}"), None, None, seq);
            if seq % 2 == 0 {
                toggle_completion(&task)
            } else {
                task
            }
        })
        .collect()
}

#[test]
fn valid_input_creates_trimmed_incomplete_task() {
    let title = format!("  {}  ", "t".repeat(100));
    let description = format!("\n{}\t", "d".repeat(500));
    validate_task(&title, Some(description.as_str())).expect("limits are inclusive");

    let task = create_task(&title, Some(description.as_str()), None, 0);
    assert!(!task.completed);
    assert_eq!(task.title, "t".repeat(100));
    assert_eq!(task.description, Some("d".repeat(500)));
    assert!(!task.id.is_nil());
}

#[test]
fn blank_titles_are_rejected() {
    assert_eq!(validate_task("", None), Err(TaskValidationError::EmptyTitle));
    assert_eq!(
        validate_task("   ", Some("body")),
        Err(TaskValidationError::EmptyTitle)
    );
}

#[test]
fn overlong_title_and_description_are_rejected() {
    assert_eq!(
        validate_task(&"x".repeat(101), None),
        Err(TaskValidationError::TitleTooLong { len: 101, max: 100 })
    );
    assert_eq!(
        validate_task("ok", Some("y".repeat(501).as_str())),
        Err(TaskValidationError::DescriptionTooLong { len: 501, max: 500 })
    );
}

#[test]
fn length_limits_count_chars_not_bytes() {
    validate_task(&"é".repeat(100), None).expect("100 two-byte chars fit");
}

#[test]
fn validation_errors_have_readable_messages() {
    assert_eq!(
        TaskValidationError::EmptyTitle.to_string(),
        "Task title is required"
    );
    let message = TaskValidationError::TitleTooLong { len: 120, max: 100 }.to_string();
    assert!(message.contains("100"));
    assert_eq!(
        TaskValidationError::DescriptionTooLong { len: 501, max: 500 }.code(),
        "description_too_long"
    );
}

#[test]
fn blank_description_is_stored_as_none() {
    let task = create_task("title", Some("   "), None, 0);
    assert_eq!(task.description, None);
}

#[test]
fn toggle_twice_restores_original() {
    let task = create_task("round trip", Some("body"), None, 4);
    assert_eq!(toggle_completion(&toggle_completion(&task)), task);
}

#[test]
fn sort_partitions_by_completion_then_descending_sequence() {
    let sorted = sort_tasks(sample_tasks());

    let first_done = sorted
        .iter()
        .position(|task| task.completed)
        .expect("sample has completed tasks");
    assert!(sorted[..first_done].iter().all(|task| !task.completed));
    assert!(sorted[first_done..].iter().all(|task| task.completed));

    for partition in [&sorted[..first_done], &sorted[first_done..]] {
        assert!(partition
            .windows(2)
            .all(|pair| pair[0].created_seq > pair[1].created_seq));
    }
}

#[test]
fn filter_all_returns_input_in_same_order() {
    let tasks = sample_tasks();
    let all = filter_tasks(&tasks, TaskFilter::All);
    let expected: Vec<&Task> = tasks.iter().collect();
    assert_eq!(all, expected);
}

#[test]
fn completed_and_pending_filters_partition_input() {
    let tasks = sample_tasks();
    let completed = filter_tasks(&tasks, TaskFilter::Completed);
    let pending = filter_tasks(&tasks, TaskFilter::Pending);

    assert_eq!(completed.len() + pending.len(), tasks.len());
    assert!(completed.iter().all(|task| task.completed));
    assert!(pending.iter().all(|task| !task.completed));
    for task in &tasks {
        let hits = completed
            .iter()
            .chain(pending.iter())
            .filter(|candidate| candidate.id == task.id)
            .count();
        assert_eq!(hits, 1);
    }
}

#[test]
fn filters_preserve_relative_order() {
    let tasks = sample_tasks();
    let pending = filter_tasks(&tasks, TaskFilter::Pending);
    let seqs: Vec<u64> = pending.iter().map(|task| task.created_seq).collect();
    assert_eq!(seqs, vec![1, 3, 5]);
}
