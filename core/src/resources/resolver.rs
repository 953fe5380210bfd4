//! Slug and reference resolution.
//!
//! All lookups hit `/resolver`; the set of query parameters decides what the
//! service resolves. The project slug is always present.

use crate::client::TaigaClient;
use crate::http::HttpRequest;
use crate::types::{
    IssueResolve, MilestoneResolve, MultipleResolve, ProjectResolve, TaskResolve, UserStoryResolve,
    WikiPageResolve,
};

pub fn project(project: &str) -> HttpRequest {
    HttpRequest::get("/resolver").query("project", project)
}

fn within(project_slug: &str, name: &str, value: &str) -> HttpRequest {
    project(project_slug).query(name, value)
}

pub fn user_story(project: &str, us: &str) -> HttpRequest {
    within(project, "us", us)
}

pub fn issue(project: &str, issue: &str) -> HttpRequest {
    within(project, "issue", issue)
}

pub fn task(project: &str, task: &str) -> HttpRequest {
    within(project, "task", task)
}

pub fn milestone(project: &str, milestone: &str) -> HttpRequest {
    within(project, "milestone", milestone)
}

pub fn wiki_page(project: &str, wikipage: &str) -> HttpRequest {
    within(project, "wikipage", wikipage)
}

/// Resolve a bare reference number to whichever resource owns it.
pub fn reference(project: &str, reference: u64) -> HttpRequest {
    within(project, "ref", &reference.to_string())
}

impl TaigaClient {
    pub async fn resolve_project(&self, project_slug: &str) -> Option<ProjectResolve> {
        self.value(project(project_slug)).await
    }

    pub async fn resolve_user_story(&self, project: &str, us: &str) -> Option<UserStoryResolve> {
        self.value(user_story(project, us)).await
    }

    pub async fn resolve_issue(&self, project: &str, issue_ref: &str) -> Option<IssueResolve> {
        self.value(issue(project, issue_ref)).await
    }

    pub async fn resolve_task(&self, project: &str, task_ref: &str) -> Option<TaskResolve> {
        self.value(task(project, task_ref)).await
    }

    pub async fn resolve_milestone(&self, project: &str, milestone_slug: &str) -> Option<MilestoneResolve> {
        self.value(milestone(project, milestone_slug)).await
    }

    pub async fn resolve_wiki_page(&self, project: &str, wikipage: &str) -> Option<WikiPageResolve> {
        self.value(wiki_page(project, wikipage)).await
    }

    pub async fn resolve_ref(&self, project: &str, reference_number: u64) -> Option<MultipleResolve> {
        self.value(reference(project, reference_number)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{Access, HttpMethod};

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn user_story_combines_project_and_us() {
        let req = user_story("demo", "us-3");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "/resolver");
        assert_eq!(req.access, Access::Public);
        assert_eq!(req.query_pairs(), pairs(&[("project", "demo"), ("us", "us-3")]));
    }

    #[test]
    fn each_lookup_uses_its_own_parameter() {
        assert_eq!(issue("p", "1").query_pairs(), pairs(&[("project", "p"), ("issue", "1")]));
        assert_eq!(task("p", "2").query_pairs(), pairs(&[("project", "p"), ("task", "2")]));
        assert_eq!(milestone("p", "s1").query_pairs(), pairs(&[("project", "p"), ("milestone", "s1")]));
        assert_eq!(wiki_page("p", "home").query_pairs(), pairs(&[("project", "p"), ("wikipage", "home")]));
        assert_eq!(reference("p", 7).query_pairs(), pairs(&[("project", "p"), ("ref", "7")]));
        assert_eq!(project("p").query_pairs(), pairs(&[("project", "p")]));
    }
}
