use serde::{Deserialize, Serialize};

/// Complete content document for the showcase, deserialized from
/// `assets/content.ron`. Everything in here is authored configuration;
/// the application never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub studio: StudioInfo,
    /// Primary navigation links, in display order
    pub nav: Vec<NavLink>,
    pub hero: HeroContent,
    pub stats: StatsContent,
    pub floor_plan: FloorPlan,
    pub showcase: ShowcaseContent,
    pub projects: ProjectsContent,
    pub location: LocationContent,
    pub contact: ContactContent,
    pub footer: FooterContent,
}

impl SiteContent {
    /// Every media asset the document references, in document order.
    /// Used by the fetch tool to materialize remote media locally.
    pub fn media(&self) -> Vec<&MediaAsset> {
        let mut assets: Vec<&MediaAsset> = Vec::new();
        assets.extend(self.hero.backdrops.iter());
        assets.push(&self.stats.reel);
        assets.push(&self.showcase.reel);
        assets.extend(self.projects.entries.iter().map(|p| &p.still));
        assets.push(&self.location.photo);
        assets
    }
}

/// Studio identity shown in the navigation header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudioInfo {
    pub name: String,
    pub home_url: String,
}

/// A label plus the URL it opens in the system browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub url: String,
}

/// A remote media asset and the local path it is stored under once
/// fetched (relative to `assets/`). The application treats the bytes as
/// opaque; only the fetch tool touches the URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAsset {
    pub url: String,
    pub path: String,
}

/// Hero section: oversized heading, side notes and cross-fading backdrops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    /// Heading lines, stacked
    pub heading: Vec<String>,
    /// Short notes rendered beside the heading
    pub side_notes: Vec<String>,
    /// Backdrops the hero cycles through
    pub backdrops: Vec<MediaAsset>,
    /// Number of decorative ruled lines below the heading
    pub rule_count: u32,
}

/// A single animated statistic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    /// Target value the counter runs up to
    pub value: u64,
    /// Unit label rendered after the number
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsContent {
    pub entries: Vec<Stat>,
    pub reel: MediaAsset,
}

/// A sound stage on the floor plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    /// Stable identifier, e.g. "stage-02"
    pub id: String,
    pub name: String,
    /// Floor area as display text, e.g. "10,486"
    pub floor_area: String,
    /// Bounding box `[x, y, w, h]` in diagram coordinates
    pub bounds: [f32; 4],
}

/// An open or closed run of line segments in diagram coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<[f32; 2]>,
    #[serde(default)]
    pub closed: bool,
}

/// The studio floor plan: wireframe geometry plus the stages laid out on
/// it, all in the fixed 800×450 logical coordinate space of the diagram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorPlan {
    /// Bounding box `[x, y, w, h]` of the whole plan
    pub bounds: [f32; 4],
    /// Wireframe strokes drawn behind the stage hit areas
    pub outline: Vec<Polyline>,
    pub stages: Vec<Stage>,
}

impl FloorPlan {
    pub fn stage(&self, id: &str) -> Option<&Stage> {
        self.stages.iter().find(|stage| stage.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowcaseContent {
    pub heading: String,
    /// Phrases cycled through the marquee strip
    pub marquee: Vec<String>,
    pub blurb: String,
    pub cta: NavLink,
    pub reel: MediaAsset,
}

/// A production shot at the studio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    /// Year or year range as display text, e.g. "2016 - 2018"
    pub years: String,
    pub still: MediaAsset,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsContent {
    /// Word flanking the stills on the left, e.g. "SHOT"
    pub flank_left: String,
    /// Word flanking the stills on the right, e.g. "HERE"
    pub flank_right: String,
    pub entries: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationContent {
    /// Kicker crumbs above the heading, e.g. ["Filming In", "Dallas"]
    pub kicker: Vec<String>,
    pub heading: String,
    pub blurb: String,
    pub photo: MediaAsset,
    /// Photo credit line
    pub credit: String,
    pub link: NavLink,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactContent {
    pub heading: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterContent {
    pub prompt: String,
    pub actions: Vec<NavLink>,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub copyright: String,
    pub legal: NavLink,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(path: &str) -> MediaAsset {
        MediaAsset {
            url: format!("https://example.com/{path}"),
            path: path.to_string(),
        }
    }

    #[test]
    fn media_collects_every_reference_in_order() {
        let content = SiteContent {
            studio: StudioInfo {
                name: "Studio".into(),
                home_url: "https://example.com".into(),
            },
            nav: Vec::new(),
            hero: HeroContent {
                heading: vec!["A".into()],
                side_notes: Vec::new(),
                backdrops: vec![asset("media/a.jpg"), asset("media/b.jpg")],
                rule_count: 5,
            },
            stats: StatsContent {
                entries: Vec::new(),
                reel: asset("media/stats.jpg"),
            },
            floor_plan: FloorPlan {
                bounds: [0.0, 0.0, 100.0, 100.0],
                outline: Vec::new(),
                stages: vec![Stage {
                    id: "stage-01".into(),
                    name: "Stage 01".into(),
                    floor_area: "10,930".into(),
                    bounds: [10.0, 10.0, 20.0, 20.0],
                }],
            },
            showcase: ShowcaseContent {
                heading: String::new(),
                marquee: Vec::new(),
                blurb: String::new(),
                cta: NavLink {
                    label: String::new(),
                    url: String::new(),
                },
                reel: asset("media/showcase.jpg"),
            },
            projects: ProjectsContent {
                flank_left: "SHOT".into(),
                flank_right: "HERE".into(),
                entries: vec![Project {
                    title: "Pilot".into(),
                    years: "2021".into(),
                    still: asset("media/pilot.jpg"),
                }],
            },
            location: LocationContent {
                kicker: Vec::new(),
                heading: String::new(),
                blurb: String::new(),
                photo: asset("media/city.jpg"),
                credit: String::new(),
                link: NavLink {
                    label: String::new(),
                    url: String::new(),
                },
            },
            contact: ContactContent {
                heading: String::new(),
                url: String::new(),
            },
            footer: FooterContent {
                prompt: String::new(),
                actions: Vec::new(),
                address: String::new(),
                phone: String::new(),
                email: String::new(),
                copyright: String::new(),
                legal: NavLink {
                    label: String::new(),
                    url: String::new(),
                },
            },
        };

        let paths: Vec<&str> = content.media().iter().map(|m| m.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "media/a.jpg",
                "media/b.jpg",
                "media/stats.jpg",
                "media/showcase.jpg",
                "media/pilot.jpg",
                "media/city.jpg",
            ]
        );

        assert!(content.floor_plan.stage("stage-01").is_some());
        assert!(content.floor_plan.stage("stage-99").is_none());
    }
}
