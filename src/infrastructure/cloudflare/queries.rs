//! GraphQL query text, one constant per metric.
//!
//! All queries share the same variables (`zoneTag`, `since`, `until`) and
//! the same `viewer.zones[].httpRequests1dGroups` envelope; they differ
//! only in the selected aggregate fields.

pub const ZONE_REQUESTS: &str = "
    query GetZoneRequests($zoneTag: String!, $since: String!, $until: String!) {
        viewer {
            zones(filter: {zoneTag_in: [$zoneTag]}) {
                httpRequests1dGroups(
                    limit: 1000
                    filter: {date_geq: $since, date_leq: $until}
                ) {
                    dimensions {
                        date
                    }
                    sum {
                        requests
                    }
                }
            }
        }
    }
";

pub const REQUESTS_BY_COUNTRY: &str = "
    query GetRequestsLocations($zoneTag: String!, $since: String!, $until: String!) {
        viewer {
            zones(filter: {zoneTag_in: [$zoneTag]}) {
                httpRequests1dGroups(
                    filter: {date_geq: $since, date_leq: $until},
                    limit: 1000
                ) {
                    sum {
                        countryMap {
                            clientCountryName
                            requests
                        }
                    }
                }
            }
        }
    }
";

pub const ZONE_BANDWIDTH: &str = "
    query GetZoneBandwidth($zoneTag: String!, $since: String!, $until: String!) {
        viewer {
            zones(filter: {zoneTag_in: [$zoneTag]}) {
                httpRequests1dGroups(
                    limit: 1000,
                    filter: {date_geq: $since, date_leq: $until}
                ) {
                    dimensions {
                        date
                    }
                    sum {
                        bytes
                    }
                }
            }
        }
    }
";

pub const BANDWIDTH_BY_COUNTRY: &str = "
    query GetBandwidthLocations($zoneTag: String!, $since: String!, $until: String!) {
        viewer {
            zones(filter: {zoneTag_in: [$zoneTag]}) {
                httpRequests1dGroups(
                    filter: {date_geq: $since, date_leq: $until},
                    limit: 1000
                ) {
                    sum {
                        countryMap {
                            clientCountryName
                            bytes
                        }
                    }
                }
            }
        }
    }
";

pub const ZONE_VISITS: &str = "
    query GetZoneVisits($zoneTag: String!, $since: String!, $until: String!) {
        viewer {
            zones(filter: {zoneTag_in: [$zoneTag]}) {
                httpRequests1dGroups(
                    limit: 1000,
                    filter: {date_geq: $since, date_leq: $until}
                ) {
                    dimensions {
                        date
                    }
                    uniq {
                        uniques
                    }
                }
            }
        }
    }
";

pub const ZONE_PAGE_VIEWS: &str = "
    query GetZonePageViews($zoneTag: String!, $since: String!, $until: String!) {
        viewer {
            zones(filter: {zoneTag_in: [$zoneTag]}) {
                httpRequests1dGroups(
                    limit: 1000,
                    filter: {date_geq: $since, date_leq: $until}
                ) {
                    dimensions {
                        date
                    }
                    sum {
                        pageViews
                    }
                }
            }
        }
    }
";

pub const HTTP_VERSIONS: &str = "
    query GetHttpProtocols($zoneTag: String!, $since: String!, $until: String!) {
        viewer {
            zones(filter: {zoneTag_in: [$zoneTag]}) {
                httpRequests1dGroups(
                    filter: {date_geq: $since, date_leq: $until},
                    limit: 1000
                ) {
                    dimensions {
                        date
                    }
                    sum {
                        clientHTTPVersionMap {
                            requests
                            clientHTTPProtocol
                        }
                    }
                }
            }
        }
    }
";

pub const SSL_TRAFFIC: &str = "
    query GetSSLTraffic($zoneTag: String!, $since: String!, $until: String!) {
        viewer {
            zones(filter: {zoneTag_in: [$zoneTag]}) {
                httpRequests1dGroups(
                    filter: {date_geq: $since, date_leq: $until},
                    limit: 1000
                ) {
                    sum {
                        clientSSLMap {
                            requests
                            clientSSLProtocol
                        }
                    }
                }
            }
        }
    }
";

pub const CONTENT_TYPES: &str = "
    query GetContentTypes($zoneTag: String!, $since: String!, $until: String!) {
        viewer {
            zones(filter: {zoneTag_in: [$zoneTag]}) {
                httpRequests1dGroups(
                    filter: {date_geq: $since, date_leq: $until},
                    limit: 1000
                ) {
                    sum {
                        contentTypeMap {
                            requests
                            edgeResponseContentTypeName
                        }
                    }
                }
            }
        }
    }
";

pub const CACHED_REQUESTS: &str = "
    query GetCachedRequests($zoneTag: String!, $since: String!, $until: String!) {
        viewer {
            zones(filter: {zoneTag_in: [$zoneTag]}) {
                httpRequests1dGroups(
                    filter: {date_geq: $since, date_leq: $until},
                    limit: 1000
                ) {
                    dimensions {
                        date
                    }
                    sum {
                        cachedRequests
                    }
                }
            }
        }
    }
";

pub const CACHED_BANDWIDTH: &str = "
    query GetCachedBandwidth($zoneTag: String!, $since: String!, $until: String!) {
        viewer {
            zones(filter: {zoneTag_in: [$zoneTag]}) {
                httpRequests1dGroups(
                    filter: {date_geq: $since, date_leq: $until},
                    limit: 1000
                ) {
                    dimensions {
                        date
                    }
                    sum {
                        cachedBytes
                    }
                }
            }
        }
    }
";

pub const ENCRYPTED_BANDWIDTH: &str = "
    query GetEncryptedBandwidth($zoneTag: String!, $since: String!, $until: String!) {
        viewer {
            zones(filter: {zoneTag_in: [$zoneTag]}) {
                httpRequests1dGroups(
                    filter: {date_geq: $since, date_leq: $until},
                    limit: 1000
                ) {
                    dimensions {
                        date
                    }
                    sum {
                        encryptedBytes
                    }
                }
            }
        }
    }
";

pub const ENCRYPTED_REQUESTS: &str = "
    query GetEncryptedRequests($zoneTag: String!, $since: String!, $until: String!) {
        viewer {
            zones(filter: {zoneTag_in: [$zoneTag]}) {
                httpRequests1dGroups(
                    filter: {date_geq: $since, date_leq: $until},
                    limit: 1000
                ) {
                    dimensions {
                        date
                    }
                    sum {
                        encryptedRequests
                    }
                }
            }
        }
    }
";

pub const STATUS_4XX: &str = "
    query GetFourXXErrors($zoneTag: String!, $since: String!, $until: String!) {
        viewer {
            zones(filter: {zoneTag_in: [$zoneTag]}) {
                httpRequests1dGroups(
                    filter: {date_geq: $since, date_leq: $until},
                    limit: 1000
                ) {
                    dimensions {
                        date
                    }
                    sum {
                        responseStatusMap {
                            requests
                            edgeResponseStatus
                        }
                    }
                }
            }
        }
    }
";

pub const STATUS_5XX: &str = "
    query GetFiveXXErrors($zoneTag: String!, $since: String!, $until: String!) {
        viewer {
            zones(filter: {zoneTag_in: [$zoneTag]}) {
                httpRequests1dGroups(
                    filter: {date_geq: $since, date_leq: $until},
                    limit: 1000
                ) {
                    dimensions {
                        date
                    }
                    sum {
                        responseStatusMap {
                            requests
                            edgeResponseStatus
                        }
                    }
                }
            }
        }
    }
";
