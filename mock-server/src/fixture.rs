//! Seeded articles served by the mock search endpoint.

use crate::{ContentItem, Contributor};

/// A stored article plus its contributors. Tags are attached per request,
/// only when the caller asks for them.
#[derive(Clone, Debug)]
pub struct StoredArticle {
    pub item: ContentItem,
    pub contributors: Vec<Contributor>,
}

fn contributor(slug: &str, name: &str) -> Contributor {
    Contributor {
        id: format!("profile/{slug}"),
        tag_type: "contributor".to_string(),
        web_title: name.to_string(),
        web_url: format!("https://www.theguardian.com/profile/{slug}"),
        api_url: format!("https://content.guardianapis.com/profile/{slug}"),
    }
}

fn article(
    id: &str,
    section: (&str, &str),
    date: &str,
    title: &str,
    contributors: &[(&str, &str)],
) -> StoredArticle {
    StoredArticle {
        item: ContentItem {
            id: id.to_string(),
            content_type: "article".to_string(),
            section_id: section.0.to_string(),
            section_name: section.1.to_string(),
            web_publication_date: date.to_string(),
            web_title: title.to_string(),
            web_url: format!("https://www.theguardian.com/{id}"),
            api_url: format!("https://content.guardianapis.com/{id}"),
            is_hosted: false,
            tags: None,
        },
        contributors: contributors
            .iter()
            .map(|(slug, name)| contributor(slug, name))
            .collect(),
    }
}

const POLITICS: (&str, &str) = ("politics", "Politics");
const WORLD: (&str, &str) = ("world", "World news");
const TECHNOLOGY: (&str, &str) = ("technology", "Technology");

/// Articles in no particular order; the handler sorts per request.
pub fn seed() -> Vec<StoredArticle> {
    vec![
        article(
            "politics/2017/jun/21/queens-speech-what-to-expect",
            POLITICS,
            "2017-06-21T08:00:00Z",
            "Queen's speech: what to expect",
            &[("heatherstewart", "Heather Stewart")],
        ),
        article(
            "politics/2017/jun/21/brexit-talks-first-day",
            POLITICS,
            "2017-06-21T15:10:44Z",
            "Brexit talks: what happened on the first day",
            &[("danielboffey", "Daniel Boffey"), ("jenniferrankin", "Jennifer Rankin")],
        ),
        article(
            "politics/2017/jun/20/politics-live-blog",
            POLITICS,
            "2017-06-20T17:45:12Z",
            "Politics live: reaction to the election result",
            &[],
        ),
        article(
            "politics/2017/jun/19/cabinet-reshuffle",
            POLITICS,
            "2017-06-19T11:02:00Z",
            "Cabinet reshuffle leaves key posts unchanged",
            &[("rowenamason", "Rowena Mason")],
        ),
        article(
            "politics/2017/jun/18/opposition-leader-interview",
            POLITICS,
            "2017-06-18T09:30:00Z",
            "Opposition leader sets out priorities in interview",
            &[("anushaasthana", "Anushka Asthana")],
        ),
        article(
            "politics/2017/jun/17/local-councils-funding",
            POLITICS,
            "2017-06-17T13:20:00Z",
            "Local councils warn of funding gap",
            &[("peterwalker", "Peter Walker")],
        ),
        article(
            "politics/2017/jun/16/voter-turnout-analysis",
            POLITICS,
            "2017-06-16T07:15:00Z",
            "Voter turnout: the numbers behind the result",
            &[],
        ),
        article(
            "politics/2017/jun/15/editorial-hung-parliament",
            POLITICS,
            "2017-06-15T18:00:00Z",
            "The Guardian view on a hung parliament",
            &[("editorial", "Editorial")],
        ),
        article(
            "world/2017/jun/21/g20-summit-preview",
            WORLD,
            "2017-06-21T06:00:00Z",
            "G20 summit: leaders arrive amid trade tensions",
            &[("juliankirchner", "Julian Kirchner")],
        ),
        article(
            "world/2017/jun/20/heatwave-europe",
            WORLD,
            "2017-06-20T12:00:00Z",
            "Heatwave grips southern Europe",
            &[],
        ),
        article(
            "technology/2017/jun/21/phone-battery-study",
            TECHNOLOGY,
            "2017-06-21T10:30:00Z",
            "Study finds phone batteries last longer than expected",
            &[("alexhern", "Alex Hern")],
        ),
        article(
            "technology/2017/jun/19/open-source-maintainers",
            TECHNOLOGY,
            "2017-06-19T16:40:00Z",
            "The quiet work of open-source maintainers",
            &[("samanthalee", "Samantha Lee"), ("alexhern", "Alex Hern")],
        ),
    ]
}
