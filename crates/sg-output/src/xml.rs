//! MATSim-style population XML backend (feature = `"xml"`).
//!
//! Writes `population.xml` in the `population_v6` shape:
//!
//! ```xml
//! <population>
//!   <person id="0">
//!     <plan selected="yes">
//!       <activity type="h" link="17" x="150" y="0" end_time="07:23:10"/>
//!       <leg mode="car"/>
//!       <activity type="w" link="3" x="0" y="250" start_time="07:23:10" end_time="15:25:40" max_dur="10:00:00"/>
//!       <leg mode="car"/>
//!       <activity type="h" link="17" x="150" y="0"/>
//!     </plan>
//!   </person>
//! </population>
//! ```
//!
//! `link` is the link's external id from the network.  Times are
//! `HH:MM:SS`, rounded to whole seconds.  Activity types use the
//! engine's short codes (`h`, `w`).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use sg_core::time::format_hms;
use sg_population::{Activity, Person, PlanElement, Population};

use crate::writer::PopulationWriter;
use crate::OutputResult;

const DOCTYPE: &str = r#" population SYSTEM "http://www.matsim.org/files/dtd/population_v6.dtd""#;

/// Streams a population into one XML file.
pub struct MatsimXmlWriter {
    out:      Writer<BufWriter<File>>,
    finished: bool,
}

impl MatsimXmlWriter {
    /// Create `population.xml` in `dir` and write the prologue and the
    /// opening `<population>` tag.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let file = File::create(dir.join("population.xml"))?;
        let mut out = Writer::new_with_indent(BufWriter::new(file), b' ', 2);
        out.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        out.write_event(Event::DocType(BytesText::from_escaped(DOCTYPE)))?;
        out.write_event(Event::Start(BytesStart::new("population")))?;
        Ok(Self { out, finished: false })
    }

    fn write_person(&mut self, person: &Person) -> OutputResult<()> {
        let id = person.id.to_string();
        let mut start = BytesStart::new("person");
        start.push_attribute(("id", id.as_str()));
        self.out.write_event(Event::Start(start))?;

        for (i, plan) in person.plans().iter().enumerate() {
            let selected = if person.selected_index() == Some(i) { "yes" } else { "no" };
            let mut plan_tag = BytesStart::new("plan");
            plan_tag.push_attribute(("selected", selected));
            self.out.write_event(Event::Start(plan_tag))?;

            for element in plan.elements() {
                match element {
                    PlanElement::Activity(a) => self.write_activity(a)?,
                    PlanElement::Leg(l) => {
                        let mut leg = BytesStart::new("leg");
                        leg.push_attribute(("mode", l.mode.as_str()));
                        self.out.write_event(Event::Empty(leg))?;
                    }
                }
            }

            self.out.write_event(Event::End(BytesEnd::new("plan")))?;
        }

        self.out.write_event(Event::End(BytesEnd::new("person")))?;
        Ok(())
    }

    fn write_activity(&mut self, a: &Activity) -> OutputResult<()> {
        let mut attrs: Vec<(&str, String)> = vec![("type", a.kind.code().to_owned())];
        if let Some(link) = &a.link_name {
            attrs.push(("link", link.clone()));
        }
        attrs.push(("x", a.coord.x.to_string()));
        attrs.push(("y", a.coord.y.to_string()));
        if let Some(t) = a.start_time {
            attrs.push(("start_time", format_hms(t)));
        }
        if let Some(t) = a.end_time {
            attrs.push(("end_time", format_hms(t)));
        }
        if let Some(t) = a.max_duration {
            attrs.push(("max_dur", format_hms(t)));
        }

        let mut tag = BytesStart::new("activity");
        for (k, v) in &attrs {
            tag.push_attribute((*k, v.as_str()));
        }
        self.out.write_event(Event::Empty(tag))?;
        Ok(())
    }
}

impl PopulationWriter for MatsimXmlWriter {
    fn write_population(&mut self, population: &Population) -> OutputResult<()> {
        for person in population {
            self.write_person(person)?;
        }
        info!("wrote {} persons (XML)", population.len());
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.write_event(Event::End(BytesEnd::new("population")))?;
        self.out.get_mut().flush()?;
        Ok(())
    }
}
