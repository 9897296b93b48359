use crate::models::Job;

/// Case-insensitive substring match over title, company, location, and description.
pub fn matches(job: &Job, needle_lower: &str) -> bool {
    [&job.title, &job.company, &job.location, &job.description]
        .iter()
        .any(|field| field.to_lowercase().contains(needle_lower))
}

/// Filters `jobs` by `query`, keeping list order. The empty query matches everything.
pub fn search_jobs<'a>(jobs: &'a [Job], query: &str) -> Vec<&'a Job> {
    let needle = query.to_lowercase();
    jobs.iter().filter(|job| matches(job, &needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::initial_jobs;

    fn ids(found: &[&Job]) -> Vec<String> {
        found.iter().map(|j| j.id.clone()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let jobs = initial_jobs();
        assert_eq!(
            ids(&search_jobs(&jobs, "")),
            vec!["job1", "job2", "job3", "job4"]
        );
    }

    #[test]
    fn test_remote_matches_the_two_remote_jobs() {
        let jobs = initial_jobs();
        let found = search_jobs(&jobs, "REMOTE");
        assert_eq!(ids(&found), vec!["job1", "job4"]);
        assert!(found.iter().all(|j| j.location == "Remote"));
    }

    #[test]
    fn test_matches_company_and_description() {
        let jobs = initial_jobs();
        assert_eq!(ids(&search_jobs(&jobs, "datacorp")), vec!["job2"]);
        assert_eq!(ids(&search_jobs(&jobs, "kubernetes")), vec!["job4"]);
    }

    #[test]
    fn test_requirements_are_not_searched() {
        let jobs = initial_jobs();
        assert!(search_jobs(&jobs, "zustand").is_empty());
    }

    #[test]
    fn test_non_matching_query_is_empty() {
        let jobs = initial_jobs();
        assert!(search_jobs(&jobs, "underwater basket weaving").is_empty());
    }
}
