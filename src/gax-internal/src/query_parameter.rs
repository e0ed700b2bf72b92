// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Add typed values to the query string of a request.
//!
//! OCI operations take scalar, timestamp, and list query parameters. Optional
//! parameters are only added when set. Lists are sent as repeated parameters
//! (`?name=a&name=b`).

use reqwest::RequestBuilder;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("the value for query parameter `{0}` is not a valid RFC 3339 timestamp")]
    InvalidTimestamp(String, #[source] time::error::Format),
}

pub trait QueryParameter {
    fn add(self, builder: RequestBuilder, name: &str) -> gax::Result<RequestBuilder>;
}

impl QueryParameter for &str {
    fn add(self, builder: RequestBuilder, name: &str) -> gax::Result<RequestBuilder> {
        Ok(builder.query(&[(name, self)]))
    }
}

impl QueryParameter for &String {
    fn add(self, builder: RequestBuilder, name: &str) -> gax::Result<RequestBuilder> {
        self.as_str().add(builder, name)
    }
}

impl QueryParameter for String {
    fn add(self, builder: RequestBuilder, name: &str) -> gax::Result<RequestBuilder> {
        self.as_str().add(builder, name)
    }
}

impl QueryParameter for bool {
    fn add(self, builder: RequestBuilder, name: &str) -> gax::Result<RequestBuilder> {
        Ok(builder.query(&[(name, self)]))
    }
}

impl QueryParameter for i32 {
    fn add(self, builder: RequestBuilder, name: &str) -> gax::Result<RequestBuilder> {
        Ok(builder.query(&[(name, self)]))
    }
}

impl QueryParameter for i64 {
    fn add(self, builder: RequestBuilder, name: &str) -> gax::Result<RequestBuilder> {
        Ok(builder.query(&[(name, self)]))
    }
}

impl QueryParameter for f64 {
    fn add(self, builder: RequestBuilder, name: &str) -> gax::Result<RequestBuilder> {
        Ok(builder.query(&[(name, self)]))
    }
}

impl QueryParameter for OffsetDateTime {
    fn add(self, builder: RequestBuilder, name: &str) -> gax::Result<RequestBuilder> {
        let value = self.format(&Rfc3339).map_err(|e| {
            gax::error::Error::binding(Error::InvalidTimestamp(name.to_string(), e))
        })?;
        value.add(builder, name)
    }
}

impl<T> QueryParameter for Option<T>
where
    T: QueryParameter,
{
    fn add(self, builder: RequestBuilder, name: &str) -> gax::Result<RequestBuilder> {
        match self {
            None => Ok(builder),
            Some(v) => v.add(builder, name),
        }
    }
}

impl<T> QueryParameter for Vec<T>
where
    T: QueryParameter,
{
    fn add(self, builder: RequestBuilder, name: &str) -> gax::Result<RequestBuilder> {
        self.into_iter().try_fold(builder, |b, v| v.add(b, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    type TestResult = anyhow::Result<()>;

    fn builder() -> anyhow::Result<reqwest::RequestBuilder> {
        Ok(reqwest::Client::builder()
            .build()?
            .get("https://loganalytics.us-ashburn-1.oci.oraclecloud.com/20200601/unused"))
    }

    fn split_query(r: &reqwest::Request) -> Vec<&str> {
        r.url()
            .query()
            .unwrap_or_default()
            .split('&')
            .filter(|p| !p.is_empty())
            .collect()
    }

    #[test]
    fn strings() -> TestResult {
        let builder = "abc".add(builder()?, "a")?;
        let builder = "d e".to_string().add(builder, "b")?;
        let builder = (&"f&g".to_string()).add(builder, "c")?;
        let request = builder.build()?;
        assert_eq!(split_query(&request), vec!["a=abc", "b=d+e", "c=f%26g"]);
        Ok(())
    }

    #[test]
    fn scalars() -> TestResult {
        let builder = true.add(builder()?, "b")?;
        let builder = 42_i32.add(builder, "i")?;
        let builder = (-7_i64).add(builder, "l")?;
        let builder = 2.5_f64.add(builder, "f")?;
        let request = builder.build()?;
        assert_eq!(split_query(&request), vec!["b=true", "i=42", "l=-7", "f=2.5"]);
        Ok(())
    }

    #[test]
    fn timestamp() -> TestResult {
        let ts = datetime!(2025-03-04 05:06:07 UTC);
        let request = ts.add(builder()?, "timeStart")?.build()?;
        assert_eq!(split_query(&request), vec!["timeStart=2025-03-04T05%3A06%3A07Z"]);
        Ok(())
    }

    #[test]
    fn timestamp_out_of_range() -> TestResult {
        let ts = OffsetDateTime::UNIX_EPOCH.replace_year(-1)?;
        let err = ts.add(builder()?, "timeStart").unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("timeStart"), "{err}");

        let err = Some(ts).add(builder()?, "timeEnd").unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[test]
    fn optional() -> TestResult {
        let builder = None::<i32>.add(builder()?, "limit")?;
        let builder = Some("token").add(builder, "page")?;
        let request = builder.build()?;
        assert_eq!(split_query(&request), vec!["page=token"]);
        Ok(())
    }

    #[test]
    fn repeated() -> TestResult {
        let values = vec!["ACTIVE".to_string(), "DELETED".to_string()];
        let request = values.add(builder()?, "lifecycleState")?.build()?;
        assert_eq!(
            split_query(&request),
            vec!["lifecycleState=ACTIVE", "lifecycleState=DELETED"]
        );

        let request = Vec::<String>::new().add(builder()?, "empty")?.build()?;
        assert_eq!(split_query(&request), Vec::<&str>::new());
        Ok(())
    }
}
